//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::StationMatch;
use crate::explain::JourneySummary;

/// Query for `GET /journey`.
///
/// Missing parameters deserialize as empty strings so the planner can
/// reject them with a JSON error.
#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
    /// Origin station name
    #[serde(default)]
    pub from_: String,

    /// Destination station name
    #[serde(default)]
    pub to: String,
}

/// Query for `GET /journey/explain`.
#[derive(Debug, Deserialize)]
pub struct ExplainQuery {
    #[serde(default)]
    pub from_: String,

    #[serde(default)]
    pub to: String,

    /// Journey index in the planner's result (defaults to 0)
    pub index: Option<i64>,
}

/// Body for `POST /explain/custom`.
#[derive(Debug, Deserialize)]
pub struct ExplainCustomRequest {
    pub from_station: String,

    pub to_station: String,

    #[serde(default)]
    pub journey_index: i64,
}

/// Response for `GET /journey/explain`.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    /// Markdown explanation
    pub explanation: String,

    pub journey_index: usize,

    pub from: String,

    pub to: String,

    pub journey_summary: JourneySummary,

    /// Whether the language model contributed
    pub ai_used: bool,
}

/// Response for `POST /explain/custom`.
#[derive(Debug, Serialize)]
pub struct CustomExplainResponse {
    pub explanation: String,

    pub ai_used: bool,
}

/// Query for `GET /stations/search`.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search text
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching stations, best first
    pub stations: Vec<StationMatch>,
}

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,

    pub service: &'static str,

    pub version: &'static str,

    /// Available endpoints
    pub endpoints: Vec<EndpointInfo>,
}

/// One entry in the endpoint listing.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub route: &'static str,
    pub description: &'static str,
}

/// Response for `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub backend: &'static str,

    /// "configured" when application credentials are set
    pub tfl_api: &'static str,

    pub ollama: OllamaStatus,
}

/// Language model status.
#[derive(Debug, Serialize)]
pub struct OllamaStatus {
    pub enabled: bool,

    pub available: bool,

    pub host: Option<String>,

    pub model: Option<String>,

    /// "connected", "disconnected" or "disabled"
    pub status: &'static str,

    /// Installed models, when reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
