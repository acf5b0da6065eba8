//! Error types for the booking API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tours_core::TourError;

/// Errors surfaced by the booking API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Catalog lookup or booking rejection.
    #[error(transparent)]
    Tour(#[from] TourError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Tour(err) => {
                tracing::warn!("Rejected request: {}", err);
                err.to_string()
            }
        };

        // Rejections ship as 200 with an inline error field. Existing
        // callers key off the body, not the status line.
        let body = serde_json::json!({
            "error": message
        });

        (StatusCode::OK, Json(body)).into_response()
    }
}

/// Result type for booking API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
