//! Conversion from TfL DTOs to domain types.

use chrono::NaiveDateTime;

use crate::domain::{Journey, Leg, StationId, StationMatch};

use super::types::{JourneyPlannerResult, ProviderJourney, ProviderLeg, SearchMatch};

/// Errors that can occur while normalizing planner output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A field required for display was absent
    #[error("journey {journey}: missing {field}")]
    MissingField { journey: usize, field: &'static str },

    /// A date-time could not be parsed
    #[error("journey {journey}: invalid timestamp {value:?}")]
    InvalidTimestamp { journey: usize, value: String },
}

/// Convert a search match to a domain match.
///
/// The interchange code is preferred over the stop point id. Returns `None`
/// if neither yields a valid identifier.
pub fn convert_match(m: &SearchMatch) -> Option<StationMatch> {
    let raw_id = m
        .ics_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(m.id.as_deref())?;
    let id = StationId::parse(raw_id).ok()?;
    let name = m.name.clone().unwrap_or_else(|| raw_id.to_string());
    Some(StationMatch::new(id, name))
}

/// Convert every journey in a planner result, preserving order.
pub fn convert_journeys(result: &JourneyPlannerResult) -> Result<Vec<Journey>, ConversionError> {
    result
        .journeys
        .iter()
        .enumerate()
        .map(|(i, j)| convert_journey(i, j))
        .collect()
}

/// Convert a single journey. `index` is only used in error messages.
pub fn convert_journey(index: usize, journey: &ProviderJourney) -> Result<Journey, ConversionError> {
    let duration = journey.duration.ok_or(ConversionError::MissingField {
        journey: index,
        field: "duration",
    })?;

    let start_time = parse_timestamp(index, journey.start_date_time.as_deref(), "startDateTime")?;
    let arrival_time =
        parse_timestamp(index, journey.arrival_date_time.as_deref(), "arrivalDateTime")?;

    let legs = journey
        .legs
        .iter()
        .map(|leg| convert_leg(index, leg))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Journey {
        duration,
        start_time,
        arrival_time,
        legs,
    })
}

/// Convert a single leg. A missing duration becomes 0.
pub fn convert_leg(index: usize, leg: &ProviderLeg) -> Result<Leg, ConversionError> {
    let mode = leg
        .mode
        .as_ref()
        .and_then(|m| m.name.clone())
        .ok_or(ConversionError::MissingField {
            journey: index,
            field: "leg mode",
        })?;

    let departure = leg
        .departure_point
        .as_ref()
        .and_then(|p| p.common_name.clone())
        .ok_or(ConversionError::MissingField {
            journey: index,
            field: "leg departure point",
        })?;

    let arrival = leg
        .arrival_point
        .as_ref()
        .and_then(|p| p.common_name.clone())
        .ok_or(ConversionError::MissingField {
            journey: index,
            field: "leg arrival point",
        })?;

    Ok(Leg {
        mode,
        departure,
        arrival,
        duration: leg.duration.unwrap_or(0),
    })
}

fn parse_timestamp(
    index: usize,
    value: Option<&str>,
    field: &'static str,
) -> Result<NaiveDateTime, ConversionError> {
    let value = value.ok_or(ConversionError::MissingField {
        journey: index,
        field,
    })?;

    value
        .parse::<NaiveDateTime>()
        .map_err(|_| ConversionError::InvalidTimestamp {
            journey: index,
            value: value.to_string(),
        })
}
