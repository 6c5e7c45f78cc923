//! `PostgreSQL` adapters for campaign persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CampaignPgPool, PostgresCampaignRepository};
