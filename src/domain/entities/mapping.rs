//! Mapping entity: the association between one short code and one URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted short code and the URL it stands for.
///
/// Both `code` and `url` are unique across the store, so a mapping is
/// reachable from either side.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Mapping {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    pub fn new(code: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            url,
            created_at,
        }
    }
}

/// Input for an insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub code: String,
    pub url: String,
}

impl NewMapping {
    pub fn new(code: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(
            "abc123ABC_".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(mapping.code, "abc123ABC_");
        assert_eq!(mapping.url, "https://example.com");
        assert_eq!(mapping.created_at, now);
    }

    #[test]
    fn test_new_mapping_creation() {
        let new_mapping = NewMapping::new("xyz789XYZ_", "https://rust-lang.org");

        assert_eq!(new_mapping.code, "xyz789XYZ_");
        assert_eq!(new_mapping.url, "https://rust-lang.org");
    }
}
