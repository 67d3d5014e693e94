//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::planner::PlanError;
use crate::tfl::TflError;

use super::dto::ErrorResponse;

/// Application error type.
///
/// Every variant renders as `{"error": message}` with its own status.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    GatewayTimeout { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::GatewayTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::BadGateway { message }
            | AppError::GatewayTimeout { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::InvalidRequest(_) => AppError::BadRequest { message },
            PlanError::StationNotFound | PlanError::NoJourneys => AppError::NotFound { message },
            PlanError::StationLookupFailed(_) | PlanError::Upstream(_) => {
                AppError::BadGateway { message }
            }
            PlanError::UpstreamTimeout => AppError::GatewayTimeout { message },
        }
    }
}

impl From<TflError> for AppError {
    fn from(e: TflError) -> Self {
        match e {
            TflError::Timeout => AppError::GatewayTimeout {
                message: e.to_string(),
            },
            TflError::InvalidUrl(_) => AppError::Internal {
                message: e.to_string(),
            },
            _ => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
