//! Journey types.
//!
//! A `Journey` is one option returned by the journey planner, reduced to
//! the fields needed for display. Legs keep the order the provider gave.

use chrono::NaiveDateTime;
use serde::Serialize;

/// One uninterrupted segment of a journey on a single mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    /// Mode name (e.g. "tube", "bus", "walking")
    pub mode: String,
    /// Departure point name
    pub departure: String,
    /// Arrival point name
    pub arrival: String,
    /// Duration in minutes
    pub duration: u32,
}

/// A complete journey option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Total duration in minutes
    pub duration: u32,
    /// Departure time from the origin
    pub start_time: NaiveDateTime,
    /// Arrival time at the destination
    pub arrival_time: NaiveDateTime,
    /// Legs, in travel order
    pub legs: Vec<Leg>,
}

impl Journey {
    /// Number of changes between legs.
    pub fn change_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }

    /// Distinct mode names, in order of first appearance.
    pub fn modes(&self) -> Vec<&str> {
        let mut modes: Vec<&str> = Vec::new();
        for leg in &self.legs {
            if !modes.contains(&leg.mode.as_str()) {
                modes.push(&leg.mode);
            }
        }
        modes
    }
}
