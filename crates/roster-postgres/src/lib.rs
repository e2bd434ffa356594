#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Embeds all migrations into the final binary.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

// Tracing target constants for consistent logging.

/// Tracing target for database connection operations.
pub const TRACING_TARGET_CONNECTION: &str = "roster_postgres::connection";

/// Tracing target for database migration operations.
pub const TRACING_TARGET_MIGRATION: &str = "roster_postgres::migrations";

/// Tracing target for the range-query engine adapter.
pub const TRACING_TARGET_STORE: &str = "roster_postgres::store";

mod client;
mod error;
pub mod model;
pub mod query;
mod schema;
mod store;

pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{
    ConnectionPool, PgClient, PgConfig, PgPoolStatus, PooledConnection, run_pending_migrations,
};
pub use crate::error::{BoxError, PgError, PgResult};
pub use crate::store::PgUserStore;
