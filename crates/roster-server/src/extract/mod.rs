//! Enhanced `axum::`[`extract`]ors with detailed rejection messages.
//!
//! Drop-in replacements for the default axum extractors that convert
//! rejections into the crate's JSON [`Error`] responses and forward
//! OpenAPI metadata to `aide`.
//!
//! [`extract`]: axum::extract
//! [`Error`]: crate::handler::Error

mod json;
mod query;

pub use crate::extract::json::Json;
pub use crate::extract::query::Query;
