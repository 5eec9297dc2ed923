// POST /predict: score one feature record.
//
// Returns 200 with the score on success.
// Returns 400 when a required field is missing (or, in strict mode, out of range).
// Returns 500 with the raw error text for any other failure.
//
// The body is taken as raw bytes so that malformed JSON lands on the 500 path
// instead of axum's own extractor rejection.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::scoring::features::{has_required_fields, FeatureRecord};
use crate::scoring::risk::{score, ScoreResult};
use crate::web::error::PredictError;
use crate::web::AppState;

pub async fn predict(State(state): State<AppState>, body: Bytes) -> Response {
    match run_prediction(&state, &body) {
        Ok(result) => {
            state.journal.response_sent(&result);
            Json(result).into_response()
        }
        Err(err) => {
            match &err {
                PredictError::Processing(message) => state.journal.failed(message),
                other => state.journal.rejected(&other.to_string()),
            }
            err.into_response()
        }
    }
}

fn run_prediction(state: &AppState, body: &[u8]) -> Result<ScoreResult, PredictError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| PredictError::Processing(e.to_string()))?;
    state.journal.request_received(&payload);

    if !has_required_fields(&payload) {
        return Err(PredictError::MissingFields);
    }

    let features: FeatureRecord =
        serde_json::from_value(payload).map_err(|e| PredictError::Processing(e.to_string()))?;

    if state.config.strict_ranges {
        let violations = features.range_violations();
        if !violations.is_empty() {
            return Err(PredictError::OutOfRange(violations));
        }
    }

    score(&features, &state.rules).map_err(|e| PredictError::Processing(e.to_string()))
}
