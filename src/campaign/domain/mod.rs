//! Domain model for campaign lifecycle management.
//!
//! The campaign domain models creation, owner-scoped patching and
//! soft-deletion of crowdfunding campaigns while keeping persistence and
//! transport concerns outside of the domain boundary.

mod campaign;
mod category;
mod error;
mod ids;
mod status;

pub use campaign::{
    Campaign, CampaignDraft, CampaignPatch, MAX_TITLE_LENGTH, PersistedCampaignData,
};
pub use category::CampaignCategory;
pub use error::CampaignDomainError;
pub use ids::{Amount, CampaignId, OwnerId};
pub use status::CampaignStatus;
