//! In-memory range-query engine.
//!
//! The reference implementation of [`RangeQueryEngine`]: it spells out the
//! candidate/exclusion/sort/truncate algorithm directly over an owned
//! sequence, and is what store-backed engines are verified against.

use crate::{RangeQuery, RangeQueryEngine, SortOrder, User};

/// Range-query engine over an in-process collection of users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Creates an engine over the given records.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn is_excluded(&self, user: &User, query: &RangeQuery) -> bool {
        let Some(after_id) = &query.after_id else {
            return false;
        };

        // The tie-break only applies at the boundary timestamp nearest the
        // resume direction; every other candidate passes untouched.
        if user.created_at != query.resume_boundary() {
            return false;
        }

        match query.order {
            SortOrder::Asc => user.id.as_str() <= after_id.as_str(),
            SortOrder::Desc => user.id.as_str() >= after_id.as_str(),
        }
    }
}

impl RangeQueryEngine for InMemoryUserStore {
    async fn list_range(&self, query: &RangeQuery) -> Vec<User> {
        let mut matches: Vec<User> = self
            .users
            .iter()
            .filter(|u| u.created_at >= query.start && u.created_at <= query.end)
            .filter(|u| !self.is_excluded(u, query))
            .cloned()
            .collect();

        matches.sort_by(|a, b| match query.order {
            SortOrder::Asc => a.composite_cmp(b),
            SortOrder::Desc => b.composite_cmp(a),
        });

        matches.truncate(query.limit.max(0) as usize);
        matches
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn store() -> InMemoryUserStore {
        InMemoryUserStore::new(vec![
            User::new("1", ts("2025-01-01T00:00:00Z")),
            User::new("2", ts("2025-01-02T00:00:00Z")),
            User::new("3", ts("2025-01-01T00:00:00Z")),
            User::new("4", ts("2025-01-03T00:00:00Z")),
            User::new("5", ts("2025-01-04T00:00:00Z")),
            User::new("6", ts("2025-01-05T00:00:00Z")),
        ])
    }

    fn ids(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[tokio::test]
    async fn ascending_with_tie_break() {
        let query = RangeQuery::new(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-01-05T00:00:00Z"),
            SortOrder::Asc,
            3,
        );
        let users = store().list_range(&query).await;
        // Records 1 and 3 share a timestamp; lexically smaller id first.
        assert_eq!(ids(&users), ["1", "3", "2"]);
    }

    #[tokio::test]
    async fn descending_reverses_tie_break() {
        let query = RangeQuery::new(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-01-02T00:00:00Z"),
            SortOrder::Desc,
            10,
        );
        let users = store().list_range(&query).await;
        assert_eq!(ids(&users), ["2", "3", "1"]);
    }

    #[tokio::test]
    async fn ascending_exclusion_at_start_boundary() {
        let query = RangeQuery::new(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-01-05T00:00:00Z"),
            SortOrder::Asc,
            3,
        )
        .after("1");
        let users = store().list_range(&query).await;
        // "1" already delivered; "3" shares its timestamp but sorts after it.
        assert_eq!(ids(&users), ["3", "2", "4"]);
    }

    #[tokio::test]
    async fn descending_exclusion_at_end_boundary() {
        let store = InMemoryUserStore::new(vec![
            User::new("a", ts("2025-01-02T00:00:00Z")),
            User::new("b", ts("2025-01-02T00:00:00Z")),
            User::new("c", ts("2025-01-01T00:00:00Z")),
        ]);
        let query = RangeQuery::new(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-01-02T00:00:00Z"),
            SortOrder::Desc,
            2,
        )
        .after("b");
        let users = store.list_range(&query).await;
        // Page boundary fell between b and a at the shared end timestamp:
        // a must come back, b must not.
        assert_eq!(ids(&users), ["a", "c"]);
    }

    #[tokio::test]
    async fn exclusion_ignores_non_boundary_timestamps() {
        let query = RangeQuery::new(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-01-05T00:00:00Z"),
            SortOrder::Asc,
            10,
        )
        .after("9");
        let users = store().list_range(&query).await;
        // "9" is past every id at the start boundary, so both tied records
        // are dropped; later timestamps are unaffected.
        assert_eq!(ids(&users), ["2", "4", "5", "6"]);
    }

    #[tokio::test]
    async fn range_is_a_closed_interval() {
        let query = RangeQuery::new(
            ts("2025-01-02T00:00:00Z"),
            ts("2025-01-03T00:00:00Z"),
            SortOrder::Asc,
            10,
        );
        let users = store().list_range(&query).await;
        assert_eq!(ids(&users), ["2", "4"]);
    }

    #[tokio::test]
    async fn truncates_to_limit() {
        let query = RangeQuery::new(
            ts("2025-01-01T00:00:00Z"),
            ts("2025-01-05T00:00:00Z"),
            SortOrder::Asc,
            2,
        );
        let users = store().list_range(&query).await;
        assert_eq!(users.len(), 2);
    }
}
