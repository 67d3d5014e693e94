//! Top-level journey request handling.
//!
//! Resolves both station names, then fetches journeys between them.
//! Each call is independent; nothing is cached between requests.

use serde::Serialize;
use tracing::info;

use crate::domain::{Journey, StationId};
use crate::tfl::TflError;

use super::config::PlannerConfig;
use super::fetch::JourneyFetcher;
use super::provider::TransitProvider;
use super::resolve::{Resolution, StationResolver};

/// Message returned when either station name cannot be resolved.
pub const STATIONS_NOT_FOUND: &str = "Could not find valid stations for the provided names";

/// Error from a journey request.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Missing or blank input
    #[error("{0}")]
    InvalidRequest(String),

    /// One or both names had no match. Which one is not reported.
    #[error("Could not find valid stations for the provided names")]
    StationNotFound,

    /// A station search call failed
    #[error("Station lookup failed: {0}")]
    StationLookupFailed(#[source] TflError),

    /// The journey planner failed after both stations resolved
    #[error("{0}")]
    Upstream(String),

    /// The journey planner timed out
    #[error("TfL API timeout")]
    UpstreamTimeout,

    /// The planner returned no journeys
    #[error("No journeys found")]
    NoJourneys,
}

impl From<TflError> for PlanError {
    fn from(e: TflError) -> Self {
        match e {
            TflError::Timeout => PlanError::UpstreamTimeout,
            TflError::Api { message, .. } => PlanError::Upstream(message),
            other => PlanError::Upstream(other.to_string()),
        }
    }
}

/// Successful journey response.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyResponse {
    /// Origin name as given
    pub from: String,

    /// Destination name as given
    pub to: String,

    pub from_id: StationId,

    pub to_id: StationId,

    /// Journey options in provider order
    pub journeys: Vec<Journey>,

    /// Number of journeys
    pub count: usize,
}

/// Journey planner.
///
/// Combines station resolution and journey fetching into a single request.
pub struct JourneyPlanner<'a, P> {
    provider: &'a P,
    config: &'a PlannerConfig,
}

impl<'a, P: TransitProvider> JourneyPlanner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Resolve both names and fetch journeys between them.
    pub async fn get_journey(
        &self,
        from_name: &str,
        to_name: &str,
    ) -> Result<JourneyResponse, PlanError> {
        if from_name.trim().is_empty() || to_name.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "Both 'from_' and 'to' parameters are required".to_string(),
            ));
        }

        let resolver = StationResolver::new(self.provider, self.config);
        let from = resolver.resolve(from_name).await;
        let to = resolver.resolve(to_name).await;

        let (from_id, to_id) = match (from, to) {
            (Resolution::Found(from), Resolution::Found(to)) => (from.id, to.id),
            (Resolution::TransportError(e), _) | (_, Resolution::TransportError(e)) => {
                return Err(PlanError::StationLookupFailed(e));
            }
            _ => return Err(PlanError::StationNotFound),
        };

        let fetcher = JourneyFetcher::new(self.provider, self.config);
        let journeys = fetcher.fetch_journeys(&from_id, &to_id).await?;

        if journeys.is_empty() {
            return Err(PlanError::NoJourneys);
        }

        info!(
            from = from_name,
            to = to_name,
            %from_id,
            %to_id,
            count = journeys.len(),
            "planned journeys"
        );

        Ok(JourneyResponse {
            from: from_name.to_string(),
            to: to_name.to_string(),
            from_id,
            to_id,
            count: journeys.len(),
            journeys,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfl::mock::{provider_journey, provider_leg, search_match};
    use crate::tfl::{JourneyPlannerResult, MockFailure, MockTflClient};

    fn paddington_to_oxford_circus() -> JourneyPlannerResult {
        JourneyPlannerResult {
            journeys: vec![provider_journey(
                15,
                "2024-03-15T10:00:00",
                "2024-03-15T10:15:00",
                vec![
                    provider_leg("walking", "Paddington", "Paddington Underground Station", Some(3)),
                    provider_leg(
                        "tube",
                        "Paddington Underground Station",
                        "Oxford Circus Underground Station",
                        Some(12),
                    ),
                ],
            )],
        }
    }

    fn provider() -> MockTflClient {
        MockTflClient::new()
            .with_station("Paddington", vec![search_match("1000174", "Paddington")])
            .with_station("Oxford Circus", vec![search_match("1000173", "Oxford Circus")])
            .with_journeys("1000174", "1000173", paddington_to_oxford_circus())
    }

    #[tokio::test]
    async fn plans_journey_between_resolved_stations() {
        let provider = provider();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let response = planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap();

        assert_eq!(response.from, "Paddington");
        assert_eq!(response.to, "Oxford Circus");
        assert_eq!(response.from_id.as_str(), "1000174");
        assert_eq!(response.to_id.as_str(), "1000173");
        assert_eq!(response.count, 1);
        assert_eq!(response.journeys[0].duration, 15);
        assert_eq!(response.journeys[0].legs.len(), 2);
        assert_eq!(response.journeys[0].legs[0].mode, "walking");
        assert_eq!(response.journeys[0].legs[1].mode, "tube");
    }

    #[tokio::test]
    async fn resolves_from_then_to() {
        let provider = provider();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap();

        assert_eq!(
            provider.search_calls(),
            vec!["Paddington".to_string(), "Oxford Circus".to_string()]
        );
        assert_eq!(
            provider.journey_calls(),
            vec![("1000174".to_string(), "1000173".to_string())]
        );
    }

    #[tokio::test]
    async fn unknown_origin_is_station_not_found() {
        let provider = provider();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let err = planner
            .get_journey("zzzqqq123", "Oxford Circus")
            .await
            .unwrap_err();

        assert!(matches!(err, PlanError::StationNotFound));
        assert_eq!(err.to_string(), STATIONS_NOT_FOUND);
        assert!(provider.journey_calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_destination_is_station_not_found() {
        let provider = provider();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let err = planner.get_journey("Paddington", "X").await.unwrap_err();
        assert!(matches!(err, PlanError::StationNotFound));
        assert!(provider.journey_calls().is_empty());
    }

    #[tokio::test]
    async fn blank_input_is_invalid() {
        let provider = provider();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        assert!(matches!(
            planner.get_journey("", "Oxford Circus").await,
            Err(PlanError::InvalidRequest(_))
        ));
        assert!(matches!(
            planner.get_journey("Paddington", "  ").await,
            Err(PlanError::InvalidRequest(_))
        ));
        assert!(provider.search_calls().is_empty());
    }

    #[tokio::test]
    async fn search_failure_is_lookup_failure() {
        let provider = provider().with_search_failure("Oxford Circus", MockFailure::Timeout);
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let err = planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PlanError::StationLookupFailed(TflError::Timeout)
        ));
        assert!(provider.journey_calls().is_empty());
    }

    #[tokio::test]
    async fn planner_message_is_passed_through() {
        let provider = provider().with_journey_failure(
            "1000174",
            "1000173",
            MockFailure::Api {
                status: 404,
                message: "No journey found for your inputs.".into(),
            },
        );
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let err = planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No journey found for your inputs.");
    }

    #[tokio::test]
    async fn planner_timeout_is_distinct() {
        let provider =
            provider().with_journey_failure("1000174", "1000173", MockFailure::Timeout);
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let err = planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap_err();

        assert!(matches!(err, PlanError::UpstreamTimeout));
    }

    #[tokio::test]
    async fn empty_plan_is_no_journeys() {
        let provider = provider().with_journeys(
            "1000174",
            "1000173",
            JourneyPlannerResult::default(),
        );
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let err = planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap_err();

        assert!(matches!(err, PlanError::NoJourneys));
    }

    #[tokio::test]
    async fn response_serializes_expected_fields() {
        let provider = provider();
        let config = PlannerConfig::default();
        let planner = JourneyPlanner::new(&provider, &config);

        let response = planner
            .get_journey("Paddington", "Oxford Circus")
            .await
            .unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["from"], "Paddington");
        assert_eq!(json["to"], "Oxford Circus");
        assert_eq!(json["from_id"], "1000174");
        assert_eq!(json["to_id"], "1000173");
        assert_eq!(json["count"], 1);
        assert_eq!(json["journeys"][0]["startTime"], "2024-03-15T10:00:00");
        assert_eq!(json["journeys"][0]["legs"][1]["arrival"], "Oxford Circus Underground Station");
    }
}
