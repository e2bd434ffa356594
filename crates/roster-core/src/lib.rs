#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging.

/// Tracing target for the listing orchestrator.
pub const TRACING_TARGET_LISTING: &str = "roster_core::listing";

mod cursor;
mod engine;
mod listing;
mod memory;
mod order;
mod page;
mod user;

pub use crate::cursor::{Cursor, CursorError};
pub use crate::engine::{RangeQuery, RangeQueryEngine};
pub use crate::listing::{ListingParams, ListingService, ParamsError};
pub use crate::memory::InMemoryUserStore;
pub use crate::order::SortOrder;
pub use crate::page::UserPage;
pub use crate::user::User;
