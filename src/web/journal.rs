// Prediction journal. Records every request payload, response payload and
// failure seen by /predict.
//
// The journal is created in main and handed to the router through AppState.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{error, info, warn, Dispatch};
use tracing_appender::non_blocking::WorkerGuard;

use crate::scoring::risk::ScoreResult;

/// Sink for the observable events of a prediction request.
pub trait PredictionJournal: Send + Sync {
    /// A request body arrived (logged before validation).
    fn request_received(&self, payload: &Value);

    /// A score was computed and is about to be returned.
    fn response_sent(&self, response: &ScoreResult);

    /// Validation rejected the request.
    fn rejected(&self, reason: &str);

    /// Processing failed; the message is what the caller receives.
    fn failed(&self, message: &str);
}

/// Journal that emits structured tracing events only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingJournal;

impl PredictionJournal for TracingJournal {
    fn request_received(&self, payload: &Value) {
        info!(payload = %payload, "Received prediction request");
    }

    fn response_sent(&self, response: &ScoreResult) {
        info!(
            risk = response.risk,
            probability = response.probability,
            risk_level = %response.risk_level,
            "Prediction response"
        );
    }

    fn rejected(&self, reason: &str) {
        warn!(reason, "Prediction request rejected");
    }

    fn failed(&self, message: &str) {
        error!(error = message, "Error processing request");
    }
}

/// Journal that also writes every event to a dedicated log file.
///
/// Events go through a private tracing dispatcher whose fmt layer writes to a
/// `tracing_appender` non-blocking writer, so request handlers never block on
/// file I/O. The file gets these events and nothing from the global subscriber.
pub struct FileJournal {
    dispatch: Dispatch,
}

impl FileJournal {
    /// Open (or create) the journal file in append mode.
    ///
    /// The returned guard flushes pending lines when dropped; keep it alive
    /// for as long as the journal is in use.
    pub fn open(path: &Path) -> Result<(Self, WorkerGuard)> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open journal file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);

        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .finish();

        Ok((
            Self {
                dispatch: Dispatch::new(subscriber),
            },
            guard,
        ))
    }

    fn record(&self, event: impl FnOnce()) {
        tracing::dispatcher::with_default(&self.dispatch, event);
    }
}

impl PredictionJournal for FileJournal {
    fn request_received(&self, payload: &Value) {
        TracingJournal.request_received(payload);
        self.record(|| info!("Received prediction request: {payload}"));
    }

    fn response_sent(&self, response: &ScoreResult) {
        TracingJournal.response_sent(response);
        let body = serde_json::to_string(response).unwrap_or_else(|e| e.to_string());
        self.record(|| info!("Prediction response: {body}"));
    }

    fn rejected(&self, reason: &str) {
        TracingJournal.rejected(reason);
        self.record(|| warn!("Prediction request rejected: {reason}"));
    }

    fn failed(&self, message: &str) {
        TracingJournal.failed(message);
        self.record(|| error!("Error processing request: {message}"));
    }
}
