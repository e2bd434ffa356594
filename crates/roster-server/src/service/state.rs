//! Application state and dependency injection.

use roster_core::ListingService;
use roster_postgres::{PgClient, PgResult, PgUserStore};

use crate::service::ServiceConfig;

/// Listing service as held by the application state.
pub type UserListing = ListingService<PgUserStore>;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    listing: UserListing,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Validates the configuration and builds the connection pool; the
    /// pool itself connects lazily on first use.
    pub fn from_config(config: &ServiceConfig) -> PgResult<Self> {
        config.validate()?;

        let pg_client = config.connect_postgres()?;
        let listing = ListingService::new(PgUserStore::new(pg_client.clone()), config.page_size);

        Ok(Self { pg_client, listing })
    }

    /// Returns the database client.
    pub fn pg_client(&self) -> &PgClient {
        &self.pg_client
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(listing: UserListing);
