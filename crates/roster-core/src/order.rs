//! Traversal direction for range listings.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Direction in which a time range is traversed.
///
/// The wire representation is `asc` / `desc`, both in query parameters and
/// inside encoded continuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumString)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest records first; ties broken by ascending identifier.
    Asc,
    /// Newest records first; ties broken by descending identifier.
    Desc,
}

impl SortOrder {
    /// Returns `true` for ascending traversal.
    #[inline]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Asc)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn wire_representation() {
        assert_eq!(SortOrder::Asc.to_string(), "asc");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
        assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_str("desc").unwrap(), SortOrder::Desc);
        assert!(SortOrder::from_str("ascending").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&SortOrder::Desc).unwrap();
        assert_eq!(json, "\"desc\"");
        let order: SortOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, SortOrder::Desc);
    }
}
