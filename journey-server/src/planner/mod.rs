//! Journey planning over the transit provider.
//!
//! This module answers: "how do I get from this station to that one?"
//!
//! A request resolves both free-text names to station identifiers (first
//! search match wins), then asks the provider's journey planner for
//! options departing now and normalizes them for display.

mod config;
mod fetch;
mod plan;
mod provider;
mod resolve;

pub use config::PlannerConfig;
pub use fetch::JourneyFetcher;
pub use plan::{JourneyPlanner, JourneyResponse, PlanError, STATIONS_NOT_FOUND};
pub use provider::TransitProvider;
pub use resolve::{Resolution, StationResolver};
