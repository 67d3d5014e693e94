//! TfL Unified API HTTP client.
//!
//! Wraps the two endpoints the server needs: stop point search and the
//! journey planner. Every call is a single attempt; failures are returned
//! to the caller as `TflError`.

use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{ModeSet, StationId};

use super::error::TflError;
use super::types::{ApiErrorBody, JourneyPlannerResult, SearchResponse};

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Maximum number of body characters kept in JSON errors.
const ERROR_BODY_PREVIEW: usize = 500;

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Application id, sent as `app_id` when a key is also set
    pub app_id: Option<String>,
    /// Application key, sent as `app_key` when an id is also set
    pub app_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config for anonymous access to production TfL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: None,
            app_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the application credentials.
    pub fn with_credentials(mut self, app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self.app_key = Some(app_key.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The credential pair, if both halves are set and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.app_id.as_deref(), self.app_key.as_deref()) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => Some((id, key)),
            _ => None,
        }
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Journey planner query options.
#[derive(Debug, Clone)]
pub struct JourneyOptions {
    /// Modes the planner may use
    pub modes: ModeSet,
    /// Whether to search beyond the London area
    pub national_search: bool,
}

impl Default for JourneyOptions {
    fn default() -> Self {
        Self {
            modes: ModeSet::default(),
            national_search: true,
        }
    }
}

/// TfL Unified API client.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let credentials = config
            .credentials()
            .map(|(id, key)| (id.to_string(), key.to_string()));

        Ok(Self {
            http,
            base_url: config.base_url,
            credentials,
        })
    }

    /// Whether requests carry application credentials.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Search stop points by free text.
    ///
    /// # Arguments
    ///
    /// * `query` - Station name as typed by the user
    /// * `modes` - Modes to restrict matches to
    /// * `max_results` - Result-count cap sent to the API
    pub async fn search_stop_points(
        &self,
        query: &str,
        modes: &ModeSet,
        max_results: usize,
    ) -> Result<SearchResponse, TflError> {
        let url = self.endpoint(&["StopPoint", "Search", query])?;

        let request = self.authorized(self.http.get(url)).query(&[
            ("modes", modes.to_query()),
            ("maxResults", max_results.to_string()),
        ]);

        debug!(query, "searching stop points");
        self.send_json(request).await
    }

    /// Plan journeys between two stations, departing now.
    pub async fn journey_results(
        &self,
        from: &StationId,
        to: &StationId,
        options: &JourneyOptions,
    ) -> Result<JourneyPlannerResult, TflError> {
        let url = self.endpoint(&[
            "Journey",
            "JourneyResults",
            from.as_str(),
            "to",
            to.as_str(),
        ])?;

        let request = self.authorized(self.http.get(url)).query(&[
            ("mode", options.modes.to_query()),
            ("timeIs", "departing".to_string()),
            ("nationalSearch", options.national_search.to_string()),
        ]);

        debug!(%from, %to, "requesting journey results");
        self.send_json(request).await
    }

    /// Build an endpoint URL, percent-encoding each path segment.
    ///
    /// Dot segments are rejected since the URL parser would resolve them
    /// against the path instead of sending them.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TflError> {
        if let Some(seg) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(TflError::InvalidUrl(format!("dot path segment: {seg:?}")));
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| TflError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| TflError::InvalidUrl(format!("cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Attach the credential pair, if configured.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some((id, key)) => request.query(&[("app_id", id), ("app_key", key)]),
            None => request,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, TflError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_PREVIEW).collect()),
        })
    }
}

/// Extract a human-readable message from an error response.
///
/// Uses the API's `message` field when the body carries a non-blank one,
/// otherwise a generic message naming the status code.
pub fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("TfL API error: {}", status.as_u16()))
}
