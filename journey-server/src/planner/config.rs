//! Planner configuration.

use crate::domain::ModeSet;
use crate::tfl::JourneyOptions;

/// Configuration parameters for station resolution and journey fetching.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Modes used for both station search and journey planning.
    pub modes: ModeSet,

    /// Result-count cap sent with station searches.
    pub max_search_results: usize,

    /// Minimum trimmed query length, in characters.
    /// Shorter names resolve to not-found without a network call.
    pub min_query_chars: usize,

    /// Whether journey planning searches beyond London.
    pub national_search: bool,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        modes: ModeSet,
        max_search_results: usize,
        min_query_chars: usize,
        national_search: bool,
    ) -> Self {
        Self {
            modes,
            max_search_results,
            min_query_chars,
            national_search,
        }
    }

    /// Journey planner options derived from this configuration.
    pub fn journey_options(&self) -> JourneyOptions {
        JourneyOptions {
            modes: self.modes.clone(),
            national_search: self.national_search,
        }
    }

    /// Whether `name` is worth searching for.
    ///
    /// Names made only of dots are rejected: `.` and `..` cannot be sent
    /// as a URL path segment.
    pub fn is_searchable(&self, name: &str) -> bool {
        let trimmed = name.trim();
        !trimmed.is_empty()
            && !trimmed.chars().all(|c| c == '.')
            && trimmed.chars().count() >= self.min_query_chars
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            modes: ModeSet::default(),
            max_search_results: 5,
            min_query_chars: 2,
            national_search: true,
        }
    }
}
