//! Station identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A canonical station identifier assigned by the transit provider.
///
/// Identifiers are opaque codes such as `1000174` (an ICS code) or
/// `940GZZLUPAC` (a NaPTAN code). They are never empty and never contain
/// whitespace or path separators, so they can be placed in a URL path
/// segment as-is.
///
/// # Examples
///
/// ```
/// use journey_server::domain::StationId;
///
/// let pad = StationId::parse("1000174").unwrap();
/// assert_eq!(pad.as_str(), "1000174");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("Oxford Circus").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        if s.contains('/') {
            return Err(InvalidStationId {
                reason: "must not contain '/'",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationId::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station returned by the provider's search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationMatch {
    /// Canonical identifier
    pub id: StationId,
    /// Display name
    pub name: String,
}

impl StationMatch {
    /// Create a new station match.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9A-Z]{1,16}") {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Anything containing whitespace is rejected
        #[test]
        fn whitespace_rejected(a in "[0-9A-Z]{0,8}", b in "[0-9A-Z]{0,8}", ws in "[ \t\n]") {
            let s = format!("{a}{ws}{b}");
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
