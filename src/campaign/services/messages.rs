//! Wire-shaped request and response messages.
//!
//! Categorical fields travel as integer enum indices. On update requests the
//! zero value of a field (empty string, `0`, missing deadline, index `0`)
//! leaves the stored value unchanged.

use crate::campaign::domain::Campaign;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire representation of a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignMessage {
    /// Campaign identifier.
    pub id: String,
    /// Owning actor.
    pub owner_id: i64,
    /// Campaign title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Fundraising goal.
    pub target_amount: i64,
    /// Amount collected so far.
    pub collected_amount: i64,
    /// Smallest accepted donation.
    pub min_donation: i64,
    /// Fundraising deadline.
    pub deadline: DateTime<Utc>,
    /// Status wire index.
    pub status: i32,
    /// Category wire index.
    pub category: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Campaign> for CampaignMessage {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id().to_string(),
            owner_id: campaign.owner_id().value(),
            title: campaign.title().to_owned(),
            description: campaign.description().to_owned(),
            target_amount: campaign.target_amount().value(),
            collected_amount: campaign.collected_amount().value(),
            min_donation: campaign.min_donation().value(),
            deadline: campaign.deadline(),
            status: campaign.status().wire_value(),
            category: campaign.category().wire_value(),
            created_at: campaign.created_at(),
            updated_at: campaign.updated_at(),
            deleted_at: campaign.deleted_at(),
        }
    }
}

/// Create request. The status is not caller-settable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaignRequest {
    /// Owner supplied by the identity source.
    pub owner_id: i64,
    /// Campaign title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Fundraising goal.
    pub target_amount: i64,
    /// Smallest accepted donation.
    pub min_donation: i64,
    /// Fundraising deadline.
    pub deadline: DateTime<Utc>,
    /// Category wire index.
    pub category: i32,
}

/// Create response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaignResponse {
    /// The stored campaign.
    pub created_campaign: CampaignMessage,
}

/// Lookup by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCampaignByIdRequest {
    /// Campaign identifier.
    pub id: String,
}

/// Lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCampaignByIdResponse {
    /// The requested campaign.
    pub campaign: CampaignMessage,
}

/// Lookup by owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCampaignsByOwnerRequest {
    /// Owner supplied by the identity source.
    pub owner_id: i64,
}

/// Owner lookup response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCampaignsByOwnerResponse {
    /// Campaigns owned by the requested owner, oldest first.
    pub campaigns: Vec<CampaignMessage>,
}

/// Owner-scoped update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCampaignRequest {
    /// Campaign identifier.
    pub id: String,
    /// Owner supplied by the identity source.
    pub owner_id: i64,
    /// Replacement title, empty to keep.
    pub title: String,
    /// Replacement description, empty to keep.
    pub description: String,
    /// Replacement goal, `0` to keep.
    pub target_amount: i64,
    /// Replacement minimum donation, `0` to keep.
    pub min_donation: i64,
    /// Replacement deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Replacement status wire index, `0` to keep.
    pub status: i32,
    /// Replacement category wire index, `0` to keep.
    pub category: i32,
}

/// Update response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCampaignResponse {
    /// The campaign as written.
    pub updated_campaign: CampaignMessage,
}

/// Soft-delete request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCampaignRequest {
    /// Campaign identifier.
    pub id: String,
}

/// Empty acknowledgement of a soft-delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCampaignResponse {}
