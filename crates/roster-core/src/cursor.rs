//! Opaque continuation tokens for resumable range listings.
//!
//! A cursor encodes everything needed to continue a prior listing
//! deterministically: the original time range, the traversal direction, and
//! the identifier of the last record already delivered. Unlike offset
//! pagination, performance and correctness are unaffected by page depth or
//! concurrent inserts.

use base64::prelude::*;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::SortOrder;

/// A continuation token for a range listing.
///
/// Created after every non-empty page; consumed exactly once by the next
/// request. The token is serialized as a small JSON document and wrapped in
/// URL-safe base64 so it survives a query parameter unescaped.
///
/// Cursors arrive from callers and are untrusted: [`Cursor::decode`]
/// revalidates the whole structure and never assumes the token was produced
/// by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Start of the time range (inclusive), fixed for the whole traversal.
    pub start: Timestamp,
    /// End of the time range (inclusive), fixed for the whole traversal.
    pub end: Timestamp,
    /// Traversal direction.
    pub order: SortOrder,
    /// Identifier of the last record delivered in the previous page.
    pub last_id: String,
}

/// Failure to decode a continuation token.
///
/// Every variant is a caller error (bad input), never a system fault.
#[derive(Debug, thiserror::Error)]
#[must_use = "decode errors should be reported to the caller"]
pub enum CursorError {
    /// The token is not valid URL-safe base64.
    #[error("cursor is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not valid UTF-8.
    #[error("cursor payload is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    /// The payload is not the expected JSON structure, or `order` is not
    /// one of `asc` / `desc`.
    #[error("cursor payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload decoded cleanly but carries no last-seen identifier.
    #[error("cursor carries an empty last_id")]
    EmptyLastId,
}

impl Cursor {
    /// Creates a new cursor.
    pub fn new(
        start: Timestamp,
        end: Timestamp,
        order: SortOrder,
        last_id: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            order,
            last_id: last_id.into(),
        }
    }

    /// Encodes the cursor as a URL-safe base64 string.
    pub fn encode(&self) -> String {
        // Serialization of this struct cannot fail: all fields are plain
        // strings and timestamps.
        let json = serde_json::to_vec(self).unwrap_or_default();
        BASE64_URL_SAFE_NO_PAD.encode(json)
    }

    /// Decodes and revalidates a cursor from its encoded form.
    pub fn decode(encoded: &str) -> Result<Self, CursorError> {
        let bytes = BASE64_URL_SAFE_NO_PAD.decode(encoded)?;
        let json = std::str::from_utf8(&bytes)?;
        let cursor: Self = serde_json::from_str(json)?;

        if cursor.last_id.is_empty() {
            return Err(CursorError::EmptyLastId);
        }

        Ok(cursor)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> Cursor {
        Cursor::new(
            "2025-01-01T00:00:00Z".parse().unwrap(),
            "2025-01-05T00:00:00Z".parse().unwrap(),
            SortOrder::Desc,
            "user-42",
        )
    }

    #[test]
    fn encode_decode_roundtrip() {
        let original = cursor();
        let decoded = Cursor::decode(&original.encode()).expect("decode should succeed");
        assert_eq!(original, decoded);
    }

    #[test]
    fn encoded_form_is_url_safe() {
        let encoded = cursor().encode();
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(matches!(
            Cursor::decode("not!!valid!!"),
            Err(CursorError::Base64(_))
        ));
    }

    #[test]
    fn decode_rejects_malformed_payload() {
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(b"{\"start\":\"nope\"}");
        assert!(matches!(
            Cursor::decode(&encoded),
            Err(CursorError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_unknown_order() {
        let payload = concat!(
            "{\"start\":\"2025-01-01T00:00:00Z\",",
            "\"end\":\"2025-01-02T00:00:00Z\",",
            "\"order\":\"sideways\",\"last_id\":\"u1\"}"
        );
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(payload);
        assert!(matches!(
            Cursor::decode(&encoded),
            Err(CursorError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_empty_last_id() {
        let payload = concat!(
            "{\"start\":\"2025-01-01T00:00:00Z\",",
            "\"end\":\"2025-01-02T00:00:00Z\",",
            "\"order\":\"asc\",\"last_id\":\"\"}"
        );
        let encoded = BASE64_URL_SAFE_NO_PAD.encode(payload);
        assert!(matches!(
            Cursor::decode(&encoded),
            Err(CursorError::EmptyLastId)
        ));
    }

    #[test]
    fn decode_rejects_truncated_token() {
        let encoded = cursor().encode();
        let truncated = &encoded[..encoded.len() / 2];
        assert!(Cursor::decode(truncated).is_err());
    }
}
