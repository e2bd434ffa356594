//! User record and its composite ordering key.

use std::cmp::Ordering;

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single user record.
///
/// Records are immutable once created. The ordering key used everywhere in
/// this crate is the composite `(created_at, id)` pair, never `created_at`
/// alone: multiple records may share a timestamp, and the identifier is the
/// tie-breaker that makes the ordering total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct User {
    /// Unique, opaque identifier; compared lexically.
    pub id: String,
    /// Creation timestamp (UTC).
    pub created_at: Timestamp,
}

impl User {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }

    /// Compares two records by the composite `(created_at, id)` key.
    pub fn composite_cmp(&self, other: &Self) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}
