//! Application services for campaign lifecycle orchestration.

mod error;
mod lifecycle;
pub mod messages;

pub use error::{CampaignServiceError, CampaignServiceResult, ErrorKind};
pub use lifecycle::CampaignLifecycleService;
