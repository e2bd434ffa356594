//! Monitor response types.

use jiff::Timestamp;
use roster_postgres::PgPoolStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// System monitoring status response with health information.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MonitorStatusResponse {
    /// Timestamp when this status was generated.
    pub updated_at: Timestamp,
    /// Overall system health status.
    pub is_healthy: bool,
    /// Connection pool statistics, present for healthy responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolStatus>,
}

/// Connection pool statistics.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PoolStatus {
    /// Maximum number of connections the pool may hold.
    pub max_size: usize,
    /// Connections currently managed by the pool.
    pub size: usize,
    /// Connections currently available for checkout.
    pub available: usize,
    /// Requests currently waiting for a connection.
    pub waiting: usize,
}

impl From<PgPoolStatus> for PoolStatus {
    #[inline]
    fn from(status: PgPoolStatus) -> Self {
        Self {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }
}
