//! Service configuration.

use roster_postgres::{PgClient, PgConfig, PgError, PgResult};
use serde::{Deserialize, Serialize};

// Page size bounds; the default matches a terminal-friendly page.
const MIN_PAGE_SIZE: i64 = 1;
const MAX_PAGE_SIZE: i64 = 100;
const DEFAULT_PAGE_SIZE: i64 = 50;

/// Application-level configuration.
///
/// Combines the database settings with listing behavior. The page size
/// is a deployment setting applied to every listing request.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(clap::Args))]
pub struct ServiceConfig {
    /// Database connection settings.
    #[cfg_attr(feature = "config", command(flatten))]
    #[serde(flatten)]
    pub postgres: PgConfig,

    /// Records returned per listing page (1-100).
    #[cfg_attr(
        feature = "config",
        arg(long = "page-size", env = "PAGE_SIZE", default_value = "50")
    )]
    pub page_size: i64,
}

impl ServiceConfig {
    /// Creates a configuration with the default page size.
    pub fn new(postgres: PgConfig) -> Self {
        Self {
            postgres,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the listing page size.
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> PgResult<()> {
        self.postgres.validate()?;

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(PgError::Config(format!(
                "page_size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"
            )));
        }

        Ok(())
    }

    /// Builds a database client from the embedded settings.
    pub fn connect_postgres(&self) -> PgResult<PgClient> {
        PgClient::new(self.postgres.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_bounds_page_size() {
        let postgres = PgConfig::new("postgresql://localhost/roster");
        assert!(ServiceConfig::new(postgres.clone()).validate().is_ok());

        let config = ServiceConfig::new(postgres.clone()).with_page_size(0);
        assert!(config.validate().is_err());

        let config = ServiceConfig::new(postgres).with_page_size(101);
        assert!(config.validate().is_err());
    }
}
