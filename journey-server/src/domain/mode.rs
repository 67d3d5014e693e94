//! Transport mode types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidMode(String);

/// A transport mode the provider can search and route over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Tube,
    /// Docklands Light Railway (light rail / metro)
    Dlr,
    Overground,
    Tram,
    NationalRail,
    Bus,
}

impl TransportMode {
    /// All supported modes, in the order they are sent to the provider.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Tube,
        TransportMode::Dlr,
        TransportMode::Overground,
        TransportMode::Tram,
        TransportMode::NationalRail,
        TransportMode::Bus,
    ];

    /// The provider's name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Tube => "tube",
            TransportMode::Dlr => "dlr",
            TransportMode::Overground => "overground",
            TransportMode::Tram => "tram",
            TransportMode::NationalRail => "national-rail",
            TransportMode::Bus => "bus",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidMode(s.to_string()))
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty, duplicate-free set of modes, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet(Vec<TransportMode>);

impl ModeSet {
    /// Parse a comma-separated list such as `"tube,dlr,bus"`.
    ///
    /// Blank entries are ignored and duplicates are dropped.
    pub fn parse_list(s: &str) -> Result<Self, InvalidMode> {
        let mut modes = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let mode: TransportMode = part.parse()?;
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }

        if modes.is_empty() {
            return Err(InvalidMode(s.to_string()));
        }

        Ok(ModeSet(modes))
    }

    /// The modes in this set.
    pub fn modes(&self) -> &[TransportMode] {
        &self.0
    }

    /// Comma-separated form used in provider query strings.
    pub fn to_query(&self) -> String {
        self.0
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        ModeSet(TransportMode::ALL.to_vec())
    }
}
