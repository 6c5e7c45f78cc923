//! Shared world state for campaign lifecycle BDD scenarios.

use std::sync::Arc;

use campaign_service::campaign::{
    adapters::memory::InMemoryCampaignRepository,
    services::{CampaignLifecycleService, CampaignServiceError, messages::CampaignMessage},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestCampaignService = CampaignLifecycleService<InMemoryCampaignRepository, DefaultClock>;

/// Scenario world for campaign lifecycle behaviour tests.
pub struct CampaignWorld {
    pub service: TestCampaignService,
    pub campaign: Option<CampaignMessage>,
    pub last_update: Option<Result<CampaignMessage, CampaignServiceError>>,
}

impl CampaignWorld {
    /// Creates a world with no campaign yet.
    #[must_use]
    pub fn new() -> Self {
        let service = CampaignLifecycleService::new(
            Arc::new(InMemoryCampaignRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            campaign: None,
            last_update: None,
        }
    }

    /// Returns the campaign created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no campaign has been created yet.
    pub fn campaign(&self) -> Result<&CampaignMessage, eyre::Report> {
        self.campaign
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing campaign in scenario world"))
    }
}

impl Default for CampaignWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CampaignWorld {
    CampaignWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
