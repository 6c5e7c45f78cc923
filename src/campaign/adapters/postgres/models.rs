//! Diesel row models for campaign persistence.

use super::schema::campaigns;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for campaign records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CampaignRow {
    /// Campaign identifier.
    pub id: uuid::Uuid,
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
    /// Persisted lifecycle status.
    pub status: String,
    /// Persisted category.
    pub category: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Insert model for campaign records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaigns)]
pub struct NewCampaignRow {
    /// Campaign identifier.
    pub id: uuid::Uuid,
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
    /// Persisted lifecycle status.
    pub status: String,
    /// Persisted category.
    pub category: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Soft-deletion marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Changeset for guarded campaign updates.
///
/// `None` fields are left out of the `SET` clause; `updated_at` is always
/// written so the changeset is never empty.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = campaigns)]
pub struct CampaignChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement fundraising goal.
    pub target_amount: Option<i64>,
    /// Replacement minimum donation.
    pub min_donation: Option<i64>,
    /// Replacement deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Replacement persisted status.
    pub status: Option<String>,
    /// Replacement persisted category.
    pub category: Option<String>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}
