//! A single page of a range listing.

use crate::{Cursor, User};

/// One page of results plus the token to fetch the next one.
///
/// `next_cursor` is `None` exactly when `users` is empty (the range is
/// exhausted) and `Some` otherwise, even when the page is shorter than the
/// limit. Callers probe one extra page to confirm exhaustion; see
/// [`ListingService`] for how the token is derived.
///
/// [`ListingService`]: crate::ListingService
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    /// Records in this page, ordered by the composite key.
    pub users: Vec<User>,
    /// Token resuming the traversal after the last record of this page.
    pub next_cursor: Option<Cursor>,
}

impl UserPage {
    /// Creates an empty page with no continuation.
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            next_cursor: None,
        }
    }

    /// Returns `true` when a further page may exist.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}
