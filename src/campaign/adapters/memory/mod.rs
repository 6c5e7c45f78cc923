//! In-memory adapters for campaign lifecycle tests.

mod campaign;

pub use campaign::InMemoryCampaignRepository;
