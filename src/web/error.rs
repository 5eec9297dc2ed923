// Failure shapes of /predict.
//
// The payloads are fixed: a missing field always echoes the
// full required set, never the specific keys that were absent.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::scoring::features::REQUIRED_FIELDS;
use crate::web::api_error;

#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// One or more required fields are absent.
    MissingFields,
    /// Strict mode only: fields outside their clinical ranges.
    OutOfRange(Vec<String>),
    /// Anything else; the message is returned verbatim.
    Processing(String),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::MissingFields => write!(f, "Missing required fields"),
            PredictError::OutOfRange(details) => {
                write!(f, "Validation error: {}", details.join("; "))
            }
            PredictError::Processing(message) => write!(f, "{message}"),
        }
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        match self {
            PredictError::MissingFields => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Missing required fields",
                    "required_fields": REQUIRED_FIELDS,
                })),
            )
                .into_response(),
            PredictError::OutOfRange(details) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": "Validation error",
                    "details": details,
                })),
            )
                .into_response(),
            PredictError::Processing(message) => {
                api_error(StatusCode::INTERNAL_SERVER_ERROR, &message)
            }
        }
    }
}
