//! Route-boundary error handling
//!
//! Every failure is converted into the JSON envelope
//! `{ success: false, error, statusCode?, hint? }` with the appropriate
//! HTTP status; nothing is process-fatal.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use visioncine_core::VisioncineError;

/// Errors surfaced by API routes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required `q` query parameter missing or empty
    #[error("Query parameter \"q\" is required")]
    MissingQuery,

    /// Any failure bubbling up from the scraping layer
    #[error(transparent)]
    Scrape(#[from] VisioncineError),
}

/// JSON failure envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, status_code, hint) = match &self {
            ApiError::MissingQuery => (StatusCode::BAD_REQUEST, None, None),
            ApiError::Scrape(e) => match e {
                VisioncineError::InvalidQuery(_) | VisioncineError::InvalidSlug(_) => {
                    (StatusCode::BAD_REQUEST, None, None)
                }
                VisioncineError::PlayerNotFound(slug) => {
                    tracing::debug!(slug = %slug, "no player link on watch page");
                    (StatusCode::NOT_FOUND, None, None)
                }
                other => {
                    tracing::error!(error = %other, "upstream fetch failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        other.status_code(),
                        other.hint(),
                    )
                }
            },
        };

        let body = ErrorBody {
            success: false,
            error: self.to_string(),
            status_code,
            hint,
        };

        (status, Json(body)).into_response()
    }
}

/// Result alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
