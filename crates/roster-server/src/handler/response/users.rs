//! User listing response types.

use jiff::Timestamp;
use roster_core::{User, UserPage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single user record as returned by the listing endpoint.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UserData {
    /// Unique user identifier.
    pub id: String,
    /// Creation instant (RFC 3339, UTC).
    pub created_at: Timestamp,
}

impl From<User> for UserData {
    #[inline]
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
        }
    }
}

/// One page of the cursor-paginated user listing.
///
/// `next_cursor` is the continuation token for the following page, or
/// the empty string once the traversal is exhausted.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UserPageResponse {
    /// The records of this page, in traversal order.
    pub users: Vec<UserData>,
    /// Continuation token, empty when there is no further page.
    pub next_cursor: String,
}

impl From<UserPage> for UserPageResponse {
    fn from(page: UserPage) -> Self {
        Self {
            next_cursor: page
                .next_cursor
                .as_ref()
                .map(|cursor| cursor.encode())
                .unwrap_or_default(),
            users: page.users.into_iter().map(UserData::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_core::{Cursor, SortOrder};

    use super::*;

    fn sample_user(id: &str) -> User {
        User {
            id: id.to_owned(),
            created_at: "2025-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn exhausted_page_serializes_empty_cursor() {
        let response = UserPageResponse::from(UserPage::empty());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["next_cursor"], "");
        assert_eq!(json["users"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn page_with_cursor_serializes_token() {
        let cursor = Cursor {
            start: "2025-01-01T00:00:00Z".parse().unwrap(),
            end: "2025-01-02T00:00:00Z".parse().unwrap(),
            order: SortOrder::Asc,
            last_id: "user-1".to_owned(),
        };
        let page = UserPage {
            users: vec![sample_user("user-1")],
            next_cursor: Some(cursor.clone()),
        };

        let response = UserPageResponse::from(page);
        assert_eq!(response.next_cursor, cursor.encode());
        assert_eq!(response.users[0].id, "user-1");
    }
}
