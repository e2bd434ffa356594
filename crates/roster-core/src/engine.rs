//! The range-query engine contract shared by all storage backends.

use std::future::Future;

use jiff::Timestamp;

use crate::{SortOrder, User};

/// Parameters of one range query.
///
/// `start` and `end` stay fixed for the whole traversal; continuation
/// narrows the result only through `after_id`, the identifier tie-break at
/// the boundary timestamp. Shifting the range instead would skip or
/// re-deliver records that share the previous page's boundary timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    /// Start of the time range (inclusive).
    pub start: Timestamp,
    /// End of the time range (inclusive).
    pub end: Timestamp,
    /// Traversal direction.
    pub order: SortOrder,
    /// Identifier of the last record already delivered, if resuming.
    ///
    /// Only records whose `created_at` equals the resume-side boundary
    /// (`start` when ascending, `end` when descending) are filtered by this
    /// value; all other candidates are untouched.
    pub after_id: Option<String>,
    /// Maximum number of records to return.
    pub limit: i64,
}

impl RangeQuery {
    /// Creates a first-page query with no exclusion.
    pub fn new(start: Timestamp, end: Timestamp, order: SortOrder, limit: i64) -> Self {
        Self {
            start,
            end,
            order,
            after_id: None,
            limit,
        }
    }

    /// Returns a continuation of this query after the given identifier.
    pub fn after(mut self, last_id: impl Into<String>) -> Self {
        self.after_id = Some(last_id.into());
        self
    }

    /// Returns the boundary timestamp at which identifier tie-breaking
    /// applies: `start` when ascending, `end` when descending.
    pub fn resume_boundary(&self) -> Timestamp {
        match self.order {
            SortOrder::Asc => self.start,
            SortOrder::Desc => self.end,
        }
    }
}

/// A storage backend capable of answering range queries.
///
/// Implementations must produce identical results for identical inputs over
/// identical data, regardless of the backing store: records with
/// `created_at` in `[start, end]`, minus those excluded by the `after_id`
/// tie-break, sorted by `(created_at, id)` in the requested direction and
/// truncated to `limit`.
///
/// Store faults do not surface here: an engine that cannot reach its store
/// logs the fault and returns an empty sequence, indistinguishable from an
/// exhausted range at this boundary.
pub trait RangeQueryEngine: Send + Sync {
    /// Returns up to `query.limit` records matching the range.
    fn list_range(&self, query: &RangeQuery) -> impl Future<Output = Vec<User>> + Send;
}
