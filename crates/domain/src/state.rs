//! Operating state — the occupancy/security mode of a building.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownStateError, ValidationError};

/// One of the five recognised building modes.
///
/// The external vocabulary is the lowercase tag returned by
/// [`as_str`](Self::as_str); parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperatingState {
    #[serde(rename = "closed")]
    Closed,
    #[default]
    #[serde(rename = "out of hours")]
    OutOfHours,
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "fire drill")]
    FireDrill,
    #[serde(rename = "fire alarm")]
    FireAlarm,
}

/// The two disjoint classes the states are partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateClass {
    /// Freely interchangeable day-to-day modes.
    Normal,
    /// Entered from anywhere, left only back to the last normal state.
    Emergency,
}

impl OperatingState {
    /// Every state, normal ones first.
    pub const ALL: [Self; 5] = [
        Self::Closed,
        Self::OutOfHours,
        Self::Open,
        Self::FireDrill,
        Self::FireAlarm,
    ];

    /// The normal states, in order.
    pub const NORMAL: [Self; 3] = [Self::Closed, Self::OutOfHours, Self::Open];

    /// The lowercase tag used at every external boundary.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::OutOfHours => "out of hours",
            Self::Open => "open",
            Self::FireDrill => "fire drill",
            Self::FireAlarm => "fire alarm",
        }
    }

    #[must_use]
    pub fn class(self) -> StateClass {
        match self {
            Self::Closed | Self::OutOfHours | Self::Open => StateClass::Normal,
            Self::FireDrill | Self::FireAlarm => StateClass::Emergency,
        }
    }

    #[must_use]
    pub fn is_normal(self) -> bool {
        self.class() == StateClass::Normal
    }

    #[must_use]
    pub fn is_emergency(self) -> bool {
        self.class() == StateClass::Emergency
    }

    /// Parse a start state, which must be present and normal.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStartState`] when `raw` is absent,
    /// blank, unrecognised or names an emergency state.
    pub fn parse_start(raw: Option<&str>) -> Result<Self, ValidationError> {
        raw.and_then(|s| s.parse::<Self>().ok())
            .filter(|state| state.is_normal())
            .ok_or(ValidationError::InvalidStartState)
    }
}

impl fmt::Display for OperatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingState {
    type Err = UnknownStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == folded)
            .ok_or_else(|| UnknownStateError(s.to_string()))
    }
}
