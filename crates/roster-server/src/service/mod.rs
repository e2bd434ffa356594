//! Shared service layer: configuration and application state.

mod config;
mod state;

pub use crate::service::config::ServiceConfig;
pub use crate::service::state::{ServiceState, UserListing};
