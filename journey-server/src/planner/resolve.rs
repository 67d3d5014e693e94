//! Station name resolution.
//!
//! Turns free text into a provider station identifier by taking the
//! first search match. There is no local scoring: the provider's order
//! is the ranking.

use tracing::{debug, warn};

use crate::domain::StationMatch;
use crate::tfl::{TflError, convert_match};

use super::config::PlannerConfig;
use super::provider::TransitProvider;

/// Outcome of resolving a station name.
#[derive(Debug)]
pub enum Resolution {
    /// The provider's best match
    Found(StationMatch),

    /// The name was too short or the provider had no usable match
    NotFound,

    /// The search call itself failed
    TransportError(TflError),
}

/// Resolves station names via the provider's search.
pub struct StationResolver<'a, P> {
    provider: &'a P,
    config: &'a PlannerConfig,
}

impl<'a, P: TransitProvider> StationResolver<'a, P> {
    /// Create a new resolver.
    pub fn new(provider: &'a P, config: &'a PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// Resolve a name to the first matching station.
    pub async fn resolve(&self, name: &str) -> Resolution {
        let query = name.trim();
        if !self.config.is_searchable(query) {
            debug!(query, "query too short, not searching");
            return Resolution::NotFound;
        }

        let matches = match self
            .provider
            .search_stations(query, &self.config.modes, self.config.max_search_results)
            .await
        {
            Ok(matches) => matches,
            Err(e) => {
                warn!(query, error = %e, "station search failed");
                return Resolution::TransportError(e);
            }
        };

        // Only the first match counts, even if it lacks a usable id.
        match matches.first().and_then(convert_match) {
            Some(found) => {
                debug!(query, id = %found.id, name = %found.name, "resolved station");
                Resolution::Found(found)
            }
            None => {
                debug!(query, "no station match");
                Resolution::NotFound
            }
        }
    }

    /// Search for all matching stations, best first, up to `limit`.
    ///
    /// Matches without a usable identifier are skipped.
    pub async fn search(&self, name: &str, limit: usize) -> Result<Vec<StationMatch>, TflError> {
        let query = name.trim();
        if !self.config.is_searchable(query) || limit == 0 {
            return Ok(Vec::new());
        }

        let matches = self
            .provider
            .search_stations(query, &self.config.modes, limit)
            .await?;

        Ok(matches.iter().filter_map(convert_match).take(limit).collect())
    }
}
