//! Building identifier — a case-insensitive label, stored lowercase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of the building a controller is responsible for.
///
/// The value is normalised to lowercase on every write, so `"B123"` and
/// `"b123"` name the same building. The empty string is a valid identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BuildingId(String);

impl BuildingId {
    /// Normalise `raw` into an identifier.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// Build an identifier from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIdentity`] when `raw` is `None`.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        raw.map(Self::new).ok_or(ValidationError::InvalidIdentity)
    }

    /// Borrow the normalised identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BuildingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BuildingId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<BuildingId> for String {
    fn from(value: BuildingId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lowercase_mixed_case_input() {
        for raw in ["TESTID", "testid", "TestID", "tEsTiD"] {
            assert_eq!(BuildingId::new(raw).as_str(), "testid");
        }
    }

    #[test]
    fn should_preserve_empty_identifier() {
        let id = BuildingId::new("");
        assert_eq!(id.as_str(), "");
        assert_eq!(id, BuildingId::default());
    }

    #[test]
    fn should_keep_very_long_identifier_intact() {
        let raw = "a".repeat(10_000);
        assert_eq!(BuildingId::new(&raw).as_str(), raw);
    }

    #[test]
    fn should_reject_absent_identifier() {
        assert_eq!(
            BuildingId::parse(None),
            Err(ValidationError::InvalidIdentity)
        );
    }

    #[test]
    fn should_accept_present_identifier() {
        assert_eq!(BuildingId::parse(Some("B123")).unwrap().as_str(), "b123");
    }

    #[test]
    fn should_normalise_when_deserialising() {
        let id: BuildingId = serde_json::from_str("\"HQ-North\"").unwrap();
        assert_eq!(id.as_str(), "hq-north");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"hq-north\"");
    }
}
