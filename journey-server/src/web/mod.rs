//! Web layer for the journey server.
//!
//! Provides HTTP endpoints for station search, journey planning and
//! journey explanations. Errors are returned as `{"error": message}` with
//! a status code matching their cause.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
