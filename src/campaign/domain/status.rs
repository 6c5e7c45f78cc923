//! Campaign lifecycle status.

use crate::campaign::codec;
use std::fmt;

/// Lifecycle status of a campaign.
///
/// Discriminants are the wire indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CampaignStatus {
    /// No status supplied.
    Unspecified = 0,
    /// Campaign accepts donations. Initial status of every new campaign.
    #[default]
    Active = 1,
    /// Campaign is temporarily paused by its owner.
    Paused = 2,
    /// Campaign reached its goal. Terminal.
    Completed = 3,
    /// Campaign was cancelled or soft-deleted. Terminal.
    Cancelled = 4,
}

impl CampaignStatus {
    /// All statuses in wire-index order.
    pub const ALL: [Self; 5] = [
        Self::Unspecified,
        Self::Active,
        Self::Paused,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Maps a wire index to a status. Unknown indices map to
    /// [`CampaignStatus::Unspecified`].
    #[must_use]
    pub const fn from_wire(index: i32) -> Self {
        match index {
            1 => Self::Active,
            2 => Self::Paused,
            3 => Self::Completed,
            4 => Self::Cancelled,
            _ => Self::Unspecified,
        }
    }

    /// Returns the wire index.
    #[must_use]
    pub const fn wire_value(self) -> i32 {
        self as i32
    }

    /// Maps a persisted value to a status through the codec.
    #[must_use]
    pub fn from_persisted(value: &str) -> Self {
        Self::from_wire(codec::decode_status(value))
    }

    /// Returns the persisted representation.
    ///
    /// [`CampaignStatus::Unspecified`] persists as the empty string.
    #[must_use]
    pub fn as_persisted(self) -> &'static str {
        codec::encode_status(self.wire_value())
    }

    /// Returns `true` for statuses that freeze the campaign.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns the human-readable name used in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
