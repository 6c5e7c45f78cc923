//! Port contracts for campaign lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by campaign services.

pub mod repository;

pub use repository::{CampaignRepository, CampaignRepositoryError, CampaignRepositoryResult};
