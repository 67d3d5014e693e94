//! Journey fetching and normalization.

use tracing::{debug, warn};

use crate::domain::{Journey, StationId};
use crate::tfl::{TflError, convert_journeys};

use super::config::PlannerConfig;
use super::provider::TransitProvider;

/// Fetches journey plans between resolved stations.
pub struct JourneyFetcher<'a, P> {
    provider: &'a P,
    config: &'a PlannerConfig,
}

impl<'a, P: TransitProvider> JourneyFetcher<'a, P> {
    /// Create a new fetcher.
    pub fn new(provider: &'a P, config: &'a PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch journeys departing now, normalized and in provider order.
    pub async fn fetch_journeys(
        &self,
        from: &StationId,
        to: &StationId,
    ) -> Result<Vec<Journey>, TflError> {
        let result = self
            .provider
            .plan_journeys(from, to, &self.config.journey_options())
            .await
            .inspect_err(|e| warn!(%from, %to, error = %e, "journey planner failed"))?;

        let journeys = convert_journeys(&result)?;
        debug!(%from, %to, count = journeys.len(), "fetched journeys");

        Ok(journeys)
    }
}
