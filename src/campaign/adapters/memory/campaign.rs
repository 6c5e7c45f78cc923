//! In-memory repository for campaign lifecycle tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::campaign::{
    domain::{Campaign, CampaignDomainError, CampaignId, CampaignPatch, OwnerId},
    ports::{CampaignRepository, CampaignRepositoryError, CampaignRepositoryResult},
};

/// Thread-safe in-memory campaign repository.
///
/// Every guarded write runs its checks and its mutation under a single write
/// lock, so concurrent updates cannot slip past the terminal-status guard.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCampaignRepository {
    campaigns: Arc<RwLock<HashMap<CampaignId, Campaign>>>,
}

impl InMemoryCampaignRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CampaignRepositoryResult<RwLockReadGuard<'_, HashMap<CampaignId, Campaign>>> {
        self.campaigns.read().map_err(|err| {
            CampaignRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(
        &self,
    ) -> CampaignRepositoryResult<RwLockWriteGuard<'_, HashMap<CampaignId, Campaign>>> {
        self.campaigns.write().map_err(|err| {
            CampaignRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> CampaignRepositoryResult<Campaign> {
        let mut campaigns = self.write()?;
        if campaigns.contains_key(&campaign.id()) {
            return Err(CampaignRepositoryError::DuplicateCampaign(campaign.id()));
        }
        campaigns.insert(campaign.id(), campaign.clone());
        Ok(campaign.clone())
    }

    async fn get_by_id(&self, id: CampaignId) -> CampaignRepositoryResult<Campaign> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or(CampaignRepositoryError::NotFound(id))
    }

    async fn find_by_owner(&self, owner_id: OwnerId) -> CampaignRepositoryResult<Vec<Campaign>> {
        let campaigns = self.read()?;
        let mut owned: Vec<Campaign> = campaigns
            .values()
            .filter(|campaign| campaign.owner_id() == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|campaign| (campaign.created_at(), campaign.id()));
        Ok(owned)
    }

    async fn update(
        &self,
        id: CampaignId,
        owner_id: OwnerId,
        patch: &CampaignPatch,
        updated_at: DateTime<Utc>,
    ) -> CampaignRepositoryResult<Campaign> {
        let mut campaigns = self.write()?;
        let campaign = campaigns
            .get_mut(&id)
            .ok_or(CampaignRepositoryError::NotFound(id))?;

        // Terminal status is reported ahead of ownership.
        if campaign.status().is_terminal() {
            return Err(CampaignRepositoryError::TerminalStatus {
                id,
                status: campaign.status(),
            });
        }
        if campaign.owner_id() != owner_id {
            return Err(CampaignRepositoryError::OwnerMismatch { id, owner_id });
        }

        campaign
            .apply_patch(patch, updated_at)
            .map_err(|err| match err {
                CampaignDomainError::TerminalStatus { status, .. } => {
                    CampaignRepositoryError::TerminalStatus { id, status }
                }
                other => CampaignRepositoryError::persistence(other),
            })?;
        Ok(campaign.clone())
    }

    async fn delete(
        &self,
        id: CampaignId,
        deleted_at: DateTime<Utc>,
    ) -> CampaignRepositoryResult<()> {
        let mut campaigns = self.write()?;
        let campaign = campaigns
            .get_mut(&id)
            .ok_or(CampaignRepositoryError::NotFound(id))?;
        campaign.mark_deleted(deleted_at);
        Ok(())
    }
}
