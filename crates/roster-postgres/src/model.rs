//! User model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::users;

/// User row as stored in the `users` table.
///
/// Rows are immutable once inserted: rewriting `id` or `created_at` would
/// silently break cursor continuity for in-flight traversals.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user identifier, compared lexically.
    pub id: String,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

/// Data for inserting a new user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    /// Unique user identifier.
    pub id: String,
    /// Creation timestamp.
    pub created_at: Timestamp,
}

impl NewUser {
    /// Creates an insertable user with the given identifier and timestamp.
    pub fn new(id: impl Into<String>, created_at: jiff::Timestamp) -> Self {
        Self {
            id: id.into(),
            created_at: created_at.into(),
        }
    }

    /// Creates an insertable user with a generated time-ordered identifier.
    ///
    /// UUIDv7 identifiers sort lexically in creation order, which keeps the
    /// tie-break behavior intuitive for generated data.
    pub fn generate(created_at: jiff::Timestamp) -> Self {
        Self::new(uuid::Uuid::now_v7().to_string(), created_at)
    }
}

impl From<User> for roster_core::User {
    fn from(user: User) -> Self {
        roster_core::User {
            id: user.id,
            created_at: user.created_at.into(),
        }
    }
}
