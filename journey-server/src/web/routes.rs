//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::Journey;
use crate::explain::{Explanation, JourneySummary};
use crate::planner::{JourneyPlanner, JourneyResponse, StationResolver};

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Default number of station search results.
const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Upper bound on station search results.
const MAX_SEARCH_LIMIT: usize = 20;

const ENDPOINTS: [(&str, &str); 7] = [
    ("GET /", "Service description"),
    ("GET /health", "Health check"),
    ("GET /status", "Detailed service status"),
    ("GET /stations/search", "Search stations (q, limit)"),
    ("GET /journey", "Get journey plans (from_, to)"),
    ("GET /journey/explain", "Explain a journey (from_, to, index)"),
    ("POST /explain/custom", "Explain a journey (JSON body)"),
];

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/stations/search", get(search_stations))
        .route("/journey", get(get_journey))
        .route("/journey/explain", get(explain_journey))
        .route("/explain/custom", post(explain_custom))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service description.
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "online",
        service: "London Journey Planner API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS
            .iter()
            .map(|&(route, description)| EndpointInfo { route, description })
            .collect(),
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Detailed status, including a live probe of the language model.
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let tfl_api = if state.tfl.has_credentials() {
        "configured"
    } else {
        "unconfigured"
    };

    let ollama = match state.explainer.ollama() {
        None => OllamaStatus {
            enabled: false,
            available: false,
            host: None,
            model: None,
            status: "disabled",
            models: None,
        },
        Some(client) => {
            let models = client.models().await.ok();
            let available = models.as_deref().is_some_and(|m| client.has_model(m));

            OllamaStatus {
                enabled: true,
                available,
                host: Some(client.host().to_string()),
                model: Some(client.model().to_string()),
                status: if available { "connected" } else { "disconnected" },
                models,
            }
        }
    };

    Json(StatusResponse {
        backend: "running",
        tfl_api,
        ollama,
    })
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    query: Result<Query<StationSearchRequest>, QueryRejection>,
) -> Result<Json<StationSearchResponse>, AppError> {
    let Query(req) = query?;
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);

    let resolver = StationResolver::new(state.tfl.as_ref(), state.config.as_ref());
    let stations = resolver.search(&req.q, limit).await?;

    Ok(Json(StationSearchResponse { stations }))
}

/// Plan journeys between two named stations.
async fn get_journey(
    State(state): State<AppState>,
    query: Result<Query<JourneyQuery>, QueryRejection>,
) -> Result<Json<JourneyResponse>, AppError> {
    let Query(req) = query?;
    let response = plan(&state, &req.from_, &req.to).await?;
    Ok(Json(response))
}

/// Explain one of the planned journeys.
async fn explain_journey(
    State(state): State<AppState>,
    query: Result<Query<ExplainQuery>, QueryRejection>,
) -> Result<Json<ExplainResponse>, AppError> {
    let Query(req) = query?;
    let index = req.index.unwrap_or(0);
    let (index, journey, explanation) = explain(&state, &req.from_, &req.to, index).await?;

    Ok(Json(ExplainResponse {
        explanation: explanation.text,
        journey_index: index,
        from: req.from_,
        to: req.to,
        journey_summary: JourneySummary::from_journey(&journey),
        ai_used: explanation.ai_used,
    }))
}

/// Explain a journey described in a JSON body.
async fn explain_custom(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CustomExplainResponse>, AppError> {
    // Parse JSON manually so the error body stays in our format
    let req: ExplainCustomRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let (_, _, explanation) = explain(
        &state,
        &req.from_station,
        &req.to_station,
        req.journey_index,
    )
    .await?;

    Ok(Json(CustomExplainResponse {
        explanation: explanation.text,
        ai_used: explanation.ai_used,
    }))
}

async fn plan(state: &AppState, from: &str, to: &str) -> Result<JourneyResponse, AppError> {
    let planner = JourneyPlanner::new(state.tfl.as_ref(), state.config.as_ref());
    Ok(planner.get_journey(from, to).await?)
}

/// Plan, pick the journey at `index`, and explain it.
async fn explain(
    state: &AppState,
    from: &str,
    to: &str,
    index: i64,
) -> Result<(usize, Journey, Explanation), AppError> {
    let Ok(index) = usize::try_from(index) else {
        return Err(AppError::BadRequest {
            message: "Index must be 0 or greater".to_string(),
        });
    };

    let response = plan(state, from, to).await?;
    let available = response.journeys.len();

    let Some(journey) = response.journeys.into_iter().nth(index) else {
        return Err(AppError::BadRequest {
            message: format!(
                "Journey index {index} out of range. Only {available} available."
            ),
        });
    };

    let explanation = state.explainer.explain(&journey, from, to).await;
    Ok((index, journey, explanation))
}
