//! Store-backed range-query engine.

use roster_core::{RangeQuery, RangeQueryEngine, User};

use crate::query::UserRepository;
use crate::{PgClient, TRACING_TARGET_STORE};

/// [`RangeQueryEngine`] implementation backed by PostgreSQL.
///
/// Carries the engine's degrade-to-empty fault policy: a store fault never
/// surfaces to the caller as an error, only as an empty page. The fault is
/// still recorded at error level under [`TRACING_TARGET_STORE`] so that
/// telemetry can tell "fault suppressed" apart from "confirmed empty range"
/// even though the caller cannot.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    client: PgClient,
}

impl PgUserStore {
    /// Creates an engine over the given client.
    pub fn new(client: PgClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &PgClient {
        &self.client
    }
}

impl RangeQueryEngine for PgUserStore {
    async fn list_range(&self, query: &RangeQuery) -> Vec<User> {
        let result = async {
            let mut conn = self.client.get_connection().await?;
            conn.list_users_in_range(query).await
        }
        .await;

        match result {
            Ok(rows) => rows.into_iter().map(User::from).collect(),
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_STORE,
                    error = %error,
                    start = %query.start,
                    end = %query.end,
                    "range query failed, degrading to empty result"
                );
                Vec::new()
            }
        }
    }
}
