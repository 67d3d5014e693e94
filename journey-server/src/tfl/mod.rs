//! TfL Unified API client.
//!
//! This module provides an HTTP client for Transport for London's public
//! API, which is the only source of station and journey data.
//!
//! Key characteristics of the API:
//! - Station search is fuzzy; matches come back best-first
//! - Stations have an interchange code (`icsId`) shared by all their stop
//!   points, which the journey planner accepts in place of a NaPTAN id
//! - Date-times are London local time without an offset
//! - Credentials are optional and only raise the rate limit

mod client;
mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{JourneyOptions, TflClient, TflConfig, api_error_message};
pub use convert::{ConversionError, convert_journey, convert_journeys, convert_leg, convert_match};
pub use error::TflError;
pub use mock::{MockFailure, MockTflClient};
pub use types::{
    ApiErrorBody, Identifier, JourneyPlannerResult, Point, ProviderJourney, ProviderLeg,
    SearchMatch, SearchResponse,
};
