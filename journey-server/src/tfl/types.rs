//! TfL Unified API response DTOs.
//!
//! These types map directly to the JSON returned by the StopPoint search
//! and Journey Planner endpoints. Only the fields we read are declared;
//! serde ignores the rest. Most fields are `Option` because the API omits
//! them rather than sending null.

use serde::{Deserialize, Serialize};

/// Response from `StopPoint/Search/{query}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query as the API understood it.
    pub query: Option<String>,

    /// Total number of matches (may exceed `matches.len()`).
    pub total: Option<u32>,

    /// Matches, best first.
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// A single stop point match.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    /// Interchange code shared by all stop points of a station.
    pub ics_id: Option<String>,

    /// NaPTAN or hub identifier of this stop point.
    pub id: Option<String>,

    /// Display name.
    pub name: Option<String>,

    /// Modes serving this stop point.
    pub modes: Option<Vec<String>>,

    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Response from `Journey/JourneyResults/{from}/to/{to}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyPlannerResult {
    /// Journey options, in the planner's order.
    #[serde(default)]
    pub journeys: Vec<ProviderJourney>,
}

/// A journey option as returned by the planner.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderJourney {
    /// Local departure date-time, e.g. `2024-03-15T10:00:00`.
    pub start_date_time: Option<String>,

    /// Local arrival date-time.
    pub arrival_date_time: Option<String>,

    /// Total duration in minutes.
    pub duration: Option<u32>,

    #[serde(default)]
    pub legs: Vec<ProviderLeg>,
}

/// One leg of a journey.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLeg {
    /// Leg duration in minutes. Absent for some walking legs.
    pub duration: Option<u32>,

    pub mode: Option<Identifier>,

    pub departure_point: Option<Point>,

    pub arrival_point: Option<Point>,
}

/// A named entity reference (modes, lines).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A departure or arrival point.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub common_name: Option<String>,
    pub naptan_id: Option<String>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub http_status_code: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_search_response() {
        let json = r#"{
            "$type": "Tfl.Api.Presentation.Entities.SearchResponse, Tfl.Api.Presentation.Entities",
            "query": "paddington",
            "total": 2,
            "matches": [
                {"icsId": "1000174", "modes": ["bus", "tube"], "id": "HUBPAD", "name": "Paddington", "lat": 51.516, "lon": -0.177},
                {"id": "940GZZLUPAH", "name": "Paddington (H&C Line)-Underground"}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, Some(2));
        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].ics_id.as_deref(), Some("1000174"));
        assert_eq!(response.matches[1].ics_id, None);
        assert_eq!(response.matches[1].id.as_deref(), Some("940GZZLUPAH"));
    }

    #[test]
    fn missing_matches_defaults_to_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"query": "zzz"}"#).unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn parse_journey_result() {
        let json = r#"{
            "journeys": [{
                "startDateTime": "2024-03-15T10:00:00",
                "arrivalDateTime": "2024-03-15T10:15:00",
                "duration": 15,
                "legs": [
                    {"duration": 3, "mode": {"id": "walking", "name": "walking"},
                     "departurePoint": {"commonName": "Paddington"},
                     "arrivalPoint": {"commonName": "Paddington Underground Station", "naptanId": "940GZZLUPAC"}},
                    {"mode": {"id": "tube", "name": "tube"},
                     "departurePoint": {"commonName": "Paddington Underground Station"},
                     "arrivalPoint": {"commonName": "Oxford Circus Underground Station"}}
                ]
            }]
        }"#;

        let result: JourneyPlannerResult = serde_json::from_str(json).unwrap();
        let journey = &result.journeys[0];
        assert_eq!(journey.duration, Some(15));
        assert_eq!(journey.legs.len(), 2);
        assert_eq!(journey.legs[0].duration, Some(3));
        assert_eq!(journey.legs[1].duration, None);
        assert_eq!(
            journey.legs[0].arrival_point.as_ref().unwrap().naptan_id.as_deref(),
            Some("940GZZLUPAC")
        );
    }

    #[test]
    fn parse_error_body() {
        let json = r#"{
            "$type": "Tfl.Api.Presentation.Entities.ApiError, Tfl.Api.Presentation.Entities",
            "timestampUtc": "2024-03-15T10:00:00Z",
            "exceptionType": "EntityNotFoundException",
            "httpStatusCode": 404,
            "httpStatus": "NotFound",
            "relativeUri": "/Journey/JourneyResults/x/to/y",
            "message": "No journey found"
        }"#;

        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message.as_deref(), Some("No journey found"));
        assert_eq!(body.http_status_code, Some(404));
    }
}
