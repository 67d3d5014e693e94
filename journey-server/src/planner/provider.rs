//! Transit data provider abstraction.

use std::future::Future;

use crate::domain::{ModeSet, StationId};
use crate::tfl::{JourneyOptions, JourneyPlannerResult, MockTflClient, SearchMatch, TflClient, TflError};

/// Source of station matches and journey plans.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait TransitProvider: Send + Sync {
    /// Search stations by free text, best match first.
    fn search_stations(
        &self,
        query: &str,
        modes: &ModeSet,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<SearchMatch>, TflError>> + Send;

    /// Plan journeys between two stations.
    fn plan_journeys(
        &self,
        from: &StationId,
        to: &StationId,
        options: &JourneyOptions,
    ) -> impl Future<Output = Result<JourneyPlannerResult, TflError>> + Send;
}

impl TransitProvider for TflClient {
    async fn search_stations(
        &self,
        query: &str,
        modes: &ModeSet,
        max_results: usize,
    ) -> Result<Vec<SearchMatch>, TflError> {
        let response = self.search_stop_points(query, modes, max_results).await?;
        Ok(response.matches)
    }

    async fn plan_journeys(
        &self,
        from: &StationId,
        to: &StationId,
        options: &JourneyOptions,
    ) -> Result<JourneyPlannerResult, TflError> {
        self.journey_results(from, to, options).await
    }
}

impl TransitProvider for MockTflClient {
    async fn search_stations(
        &self,
        query: &str,
        _modes: &ModeSet,
        max_results: usize,
    ) -> Result<Vec<SearchMatch>, TflError> {
        self.search(query, max_results)
    }

    async fn plan_journeys(
        &self,
        from: &StationId,
        to: &StationId,
        _options: &JourneyOptions,
    ) -> Result<JourneyPlannerResult, TflError> {
        self.plan(from, to)
    }
}
