//! In-memory TfL client for tests and local development.
//!
//! Serves canned search matches and journey results, and records the
//! calls it receives so tests can assert on network usage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::StationId;

use super::types::{
    Identifier, JourneyPlannerResult, Point, ProviderJourney, ProviderLeg, SearchMatch,
};
use super::TflError;

/// A canned failure. `TflError` itself is not `Clone`.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Non-success status with the given message
    Api { status: u16, message: String },
    /// Request timed out
    Timeout,
}

impl MockFailure {
    fn to_error(&self) -> TflError {
        match self {
            MockFailure::Api { status, message } => TflError::Api {
                status: *status,
                message: message.clone(),
            },
            MockFailure::Timeout => TflError::Timeout,
        }
    }
}

#[derive(Default)]
struct MockData {
    stations: HashMap<String, Result<Vec<SearchMatch>, MockFailure>>,
    journeys: HashMap<(String, String), Result<JourneyPlannerResult, MockFailure>>,
    search_calls: Vec<String>,
    journey_calls: Vec<(String, String)>,
}

/// Mock TfL client.
///
/// Unknown search queries return no matches; unknown station pairs return
/// an empty journey list.
#[derive(Clone, Default)]
pub struct MockTflClient {
    data: Arc<Mutex<MockData>>,
}

fn key(query: &str) -> String {
    query.trim().to_lowercase()
}

impl MockTflClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register matches for a search query (case-insensitive).
    pub fn with_station(self, query: &str, matches: Vec<SearchMatch>) -> Self {
        self.lock().stations.insert(key(query), Ok(matches));
        self
    }

    /// Make a search query fail.
    pub fn with_search_failure(self, query: &str, failure: MockFailure) -> Self {
        self.lock().stations.insert(key(query), Err(failure));
        self
    }

    /// Register a journey planner result for a station pair.
    pub fn with_journeys(self, from: &str, to: &str, result: JourneyPlannerResult) -> Self {
        self.lock()
            .journeys
            .insert((from.to_string(), to.to_string()), Ok(result));
        self
    }

    /// Make the journey planner fail for a station pair.
    pub fn with_journey_failure(self, from: &str, to: &str, failure: MockFailure) -> Self {
        self.lock()
            .journeys
            .insert((from.to_string(), to.to_string()), Err(failure));
        self
    }

    /// Queries received by the search endpoint, in order.
    pub fn search_calls(&self) -> Vec<String> {
        self.lock().search_calls.clone()
    }

    /// Station pairs received by the journey planner, in order.
    pub fn journey_calls(&self) -> Vec<(String, String)> {
        self.lock().journey_calls.clone()
    }

    pub(crate) fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchMatch>, TflError> {
        let mut data = self.lock();
        data.search_calls.push(query.to_string());

        match data.stations.get(&key(query)) {
            Some(Ok(matches)) => Ok(matches.iter().take(max_results).cloned().collect()),
            Some(Err(failure)) => Err(failure.to_error()),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn plan(&self, from: &StationId, to: &StationId) -> Result<JourneyPlannerResult, TflError> {
        let mut data = self.lock();
        let pair = (from.as_str().to_string(), to.as_str().to_string());
        data.journey_calls.push(pair.clone());

        match data.journeys.get(&pair) {
            Some(Ok(result)) => Ok(result.clone()),
            Some(Err(failure)) => Err(failure.to_error()),
            None => Ok(JourneyPlannerResult::default()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockData> {
        // Ignore poisoning from a panicked test.
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Build a search match with an interchange code.
pub fn search_match(ics_id: &str, name: &str) -> SearchMatch {
    SearchMatch {
        ics_id: Some(ics_id.to_string()),
        id: Some(format!("HUB{ics_id}")),
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Build a planner leg.
pub fn provider_leg(mode: &str, from: &str, to: &str, duration: Option<u32>) -> ProviderLeg {
    ProviderLeg {
        duration,
        mode: Some(Identifier {
            id: Some(mode.to_string()),
            name: Some(mode.to_string()),
        }),
        departure_point: Some(Point {
            common_name: Some(from.to_string()),
            naptan_id: None,
        }),
        arrival_point: Some(Point {
            common_name: Some(to.to_string()),
            naptan_id: None,
        }),
    }
}

/// Build a planner journey.
pub fn provider_journey(duration: u32, start: &str, arrival: &str, legs: Vec<ProviderLeg>) -> ProviderJourney {
    ProviderJourney {
        start_date_time: Some(start.to_string()),
        arrival_date_time: Some(arrival.to_string()),
        duration: Some(duration),
        legs,
    }
}
