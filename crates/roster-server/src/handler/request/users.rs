//! User listing request types.

use roster_core::ListingParams;
use schemars::JsonSchema;
use serde::Deserialize;

/// Query parameters for the cursor-paginated user listing.
///
/// A request either opens a traversal with `start`, `end` and `order`,
/// or resumes one with `next_cursor` alone. All fields arrive as
/// strings; validation happens when the parameters are resolved against
/// the listing service.
#[must_use]
#[derive(Debug, Default, Clone, Deserialize, JsonSchema)]
pub struct ListUsersRequest {
    /// Opaque continuation token from a previous page.
    pub next_cursor: Option<String>,
    /// Inclusive lower bound of the creation-time window (RFC 3339).
    pub start: Option<String>,
    /// Inclusive upper bound of the creation-time window (RFC 3339).
    pub end: Option<String>,
    /// Traversal direction: `asc` or `desc`.
    pub order: Option<String>,
}

impl From<ListUsersRequest> for ListingParams {
    /// An empty value (`?start=`) is treated the same as an absent one,
    /// so only meaningfully provided parameters reach validation.
    fn from(request: ListUsersRequest) -> Self {
        ListingParams {
            next_cursor: provided(request.next_cursor),
            start: provided(request.start),
            end: provided(request.end),
            order: provided(request.order),
        }
    }
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_parameters_are_treated_as_absent() {
        let request = ListUsersRequest {
            next_cursor: Some("abc".to_owned()),
            start: Some(String::new()),
            end: Some(String::new()),
            order: None,
        };

        let params = ListingParams::from(request);
        assert_eq!(params.next_cursor.as_deref(), Some("abc"));
        assert!(params.start.is_none());
        assert!(params.end.is_none());
        assert!(params.order.is_none());
    }
}
