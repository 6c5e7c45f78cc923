//! Translation between wire enum indices and their persisted string form.
//!
//! Both tables are closed and built once per process. Every lookup is total:
//! an index outside the table encodes to the zero-value string and an
//! unrecognized string decodes to index `0`. Legacy or malformed persisted
//! values therefore read back as `unspecified` instead of failing the
//! request.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Persisted category names in wire-index order.
const CATEGORY_NAMES: [&str; 10] = [
    "unspecified",
    "education",
    "healthcare",
    "environment",
    "animals",
    "emergency",
    "community",
    "technology",
    "arts",
    "sports",
];

/// Persisted status names in wire-index order.
///
/// Index `0` persists as the empty string; rows written with an unspecified
/// status must keep reading back as index `0`.
const STATUS_NAMES: [&str; 5] = ["", "active", "paused", "completed", "cancelled"];

/// Category lookup tables.
pub static CATEGORY: LazyLock<EnumTable> = LazyLock::new(|| EnumTable::build(&CATEGORY_NAMES, &[]));

/// Status lookup tables. `"unspecified"` is accepted as an alias of index `0`.
pub static STATUS: LazyLock<EnumTable> =
    LazyLock::new(|| EnumTable::build(&STATUS_NAMES, &[("unspecified", 0)]));

/// Forward table and reverse index for one closed enumeration.
#[derive(Debug)]
pub struct EnumTable {
    names: &'static [&'static str],
    reverse: HashMap<&'static str, i32>,
}

impl EnumTable {
    fn build(names: &'static [&'static str], aliases: &[(&'static str, i32)]) -> Self {
        let mut reverse: HashMap<&'static str, i32> = names
            .iter()
            .zip(0_i32..)
            .map(|(name, index)| (*name, index))
            .collect();
        for (alias, index) in aliases {
            reverse.entry(*alias).or_insert(*index);
        }
        Self { names, reverse }
    }

    /// Returns the persisted string for a wire index.
    #[must_use]
    pub fn encode(&self, index: i32) -> &'static str {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.names.get(position))
            .or_else(|| self.names.first())
            .copied()
            .unwrap_or_default()
    }

    /// Returns the wire index for a persisted string.
    #[must_use]
    pub fn decode(&self, value: &str) -> i32 {
        self.reverse.get(value).copied().unwrap_or(0)
    }
}

/// Encodes a category wire index to its persisted form.
#[must_use]
pub fn encode_category(index: i32) -> &'static str {
    CATEGORY.encode(index)
}

/// Decodes a persisted category to its wire index.
#[must_use]
pub fn decode_category(value: &str) -> i32 {
    CATEGORY.decode(value)
}

/// Encodes a status wire index to its persisted form.
#[must_use]
pub fn encode_status(index: i32) -> &'static str {
    STATUS.encode(index)
}

/// Decodes a persisted status to its wire index.
#[must_use]
pub fn decode_status(value: &str) -> i32 {
    STATUS.decode(value)
}
