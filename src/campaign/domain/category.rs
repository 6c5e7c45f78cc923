//! Campaign category.

use crate::campaign::codec;
use std::fmt;

/// Category a campaign raises funds for.
///
/// Discriminants are the wire indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CampaignCategory {
    /// No category supplied.
    #[default]
    Unspecified = 0,
    /// Schooling and learning.
    Education = 1,
    /// Medical treatment and care.
    Healthcare = 2,
    /// Environmental protection.
    Environment = 3,
    /// Animal welfare.
    Animals = 4,
    /// Disaster and emergency relief.
    Emergency = 5,
    /// Local community projects.
    Community = 6,
    /// Technology projects.
    Technology = 7,
    /// Arts and culture.
    Arts = 8,
    /// Sports and recreation.
    Sports = 9,
}

impl CampaignCategory {
    /// All categories in wire-index order.
    pub const ALL: [Self; 10] = [
        Self::Unspecified,
        Self::Education,
        Self::Healthcare,
        Self::Environment,
        Self::Animals,
        Self::Emergency,
        Self::Community,
        Self::Technology,
        Self::Arts,
        Self::Sports,
    ];

    /// Maps a wire index to a category. Unknown indices map to
    /// [`CampaignCategory::Unspecified`].
    #[must_use]
    pub const fn from_wire(index: i32) -> Self {
        match index {
            1 => Self::Education,
            2 => Self::Healthcare,
            3 => Self::Environment,
            4 => Self::Animals,
            5 => Self::Emergency,
            6 => Self::Community,
            7 => Self::Technology,
            8 => Self::Arts,
            9 => Self::Sports,
            _ => Self::Unspecified,
        }
    }

    /// Returns the wire index.
    #[must_use]
    pub const fn wire_value(self) -> i32 {
        self as i32
    }

    /// Maps a persisted value to a category through the codec.
    #[must_use]
    pub fn from_persisted(value: &str) -> Self {
        Self::from_wire(codec::decode_category(value))
    }

    /// Returns the persisted representation.
    #[must_use]
    pub fn as_persisted(self) -> &'static str {
        codec::encode_category(self.wire_value())
    }
}

impl fmt::Display for CampaignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_persisted())
    }
}
