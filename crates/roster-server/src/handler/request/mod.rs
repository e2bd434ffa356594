//! Request (deserialization) types for all handlers.

mod users;

pub use crate::handler::request::users::ListUsersRequest;
