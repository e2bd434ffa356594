//! Response (serialization) types for all handlers.

mod error_response;
mod monitor;
mod users;

pub use crate::handler::response::error_response::ErrorResponse;
pub use crate::handler::response::monitor::MonitorStatusResponse;
pub use crate::handler::response::users::{UserData, UserPageResponse};
