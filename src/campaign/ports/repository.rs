//! Repository port for campaign persistence and the lifecycle guard.

use crate::campaign::domain::{Campaign, CampaignId, CampaignPatch, CampaignStatus, OwnerId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for campaign repository operations.
pub type CampaignRepositoryResult<T> = Result<T, CampaignRepositoryError>;

/// Campaign persistence contract.
///
/// Implementations enforce the terminal-status guard and owner scoping
/// atomically with the write they protect.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Stores a new campaign and returns the stored entity.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignRepositoryError::DuplicateCampaign`] when the
    /// identifier already exists, or [`CampaignRepositoryError::CreationFailed`]
    /// when the store reports no inserted row.
    async fn create(&self, campaign: &Campaign) -> CampaignRepositoryResult<Campaign>;

    /// Fetches a campaign by identifier.
    ///
    /// Soft-deleted campaigns are returned with their deletion marker set.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignRepositoryError::NotFound`] when no row exists.
    async fn get_by_id(&self, id: CampaignId) -> CampaignRepositoryResult<Campaign>;

    /// Returns every campaign owned by `owner_id`, oldest first.
    ///
    /// An owner without campaigns yields an empty list.
    async fn find_by_owner(&self, owner_id: OwnerId) -> CampaignRepositoryResult<Vec<Campaign>>;

    /// Applies `patch` to the campaign matching both `id` and `owner_id`,
    /// provided its status is not terminal, and returns the updated entity.
    ///
    /// # Errors
    ///
    /// When the conditional write matches no row the failure is classified as
    /// [`CampaignRepositoryError::NotFound`] (no such campaign),
    /// [`CampaignRepositoryError::TerminalStatus`] (completed or cancelled) or
    /// [`CampaignRepositoryError::OwnerMismatch`] (owned by someone else), in
    /// that order.
    async fn update(
        &self,
        id: CampaignId,
        owner_id: OwnerId,
        patch: &CampaignPatch,
        updated_at: DateTime<Utc>,
    ) -> CampaignRepositoryResult<Campaign>;

    /// Soft-deletes a campaign: sets status to cancelled and records
    /// `deleted_at`, whatever the current status.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignRepositoryError::NotFound`] when no row exists.
    async fn delete(&self, id: CampaignId, deleted_at: DateTime<Utc>)
    -> CampaignRepositoryResult<()>;
}

/// Errors returned by campaign repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CampaignRepositoryError {
    /// The campaign was not found.
    #[error("campaign not found: {0}")]
    NotFound(CampaignId),

    /// A campaign with the same identifier already exists.
    #[error("duplicate campaign identifier: {0}")]
    DuplicateCampaign(CampaignId),

    /// The store reported no inserted row.
    #[error("failed to create campaign {0}")]
    CreationFailed(CampaignId),

    /// The campaign is completed or cancelled and can no longer be updated.
    #[error("campaign {id} status is {status}")]
    TerminalStatus {
        /// Campaign that rejected the update.
        id: CampaignId,
        /// Current terminal status.
        status: CampaignStatus,
    },

    /// The campaign is not owned by the caller.
    #[error("campaign {id} is not owned by {owner_id}")]
    OwnerMismatch {
        /// Campaign that rejected the update.
        id: CampaignId,
        /// Owner supplied by the caller.
        owner_id: OwnerId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CampaignRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
