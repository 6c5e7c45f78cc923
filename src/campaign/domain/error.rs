//! Error types for campaign domain validation.

use super::{CampaignId, CampaignStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating campaign values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CampaignDomainError {
    /// The campaign title is empty after trimming.
    #[error("campaign title must not be empty")]
    EmptyTitle,

    /// The campaign title exceeds the stored column width.
    #[error("campaign title has {length} characters, at most {max} are allowed")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Largest accepted character count.
        max: usize,
    },

    /// A monetary amount is negative.
    #[error("invalid amount {0}, expected a non-negative integer")]
    NegativeAmount(i64),

    /// The campaign is in a terminal status and can no longer be changed.
    #[error("campaign {campaign_id} status is {status}")]
    TerminalStatus {
        /// Campaign that rejected the mutation.
        campaign_id: CampaignId,
        /// Status that froze the campaign.
        status: CampaignStatus,
    },
}
