//! Application state for the web layer.

use std::sync::Arc;

use crate::explain::Explainer;
use crate::planner::PlannerConfig;
use crate::tfl::TflClient;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Cloning is cheap;
/// the TfL client's connection pool is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// TfL API client
    pub tfl: Arc<TflClient>,

    /// Station resolution and journey planning settings
    pub config: Arc<PlannerConfig>,

    /// Journey explanation builder
    pub explainer: Arc<Explainer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(tfl: TflClient, config: PlannerConfig, explainer: Explainer) -> Self {
        Self {
            tfl: Arc::new(tfl),
            config: Arc::new(config),
            explainer: Arc::new(explainer),
        }
    }
}
