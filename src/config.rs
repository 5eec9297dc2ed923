use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default listen port of the scoring service.
pub const DEFAULT_PORT: u16 = 5001;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (PCOS_BIND, default 0.0.0.0)
    pub bind: String,
    /// Listen port (PCOS_PORT, default 5001)
    pub port: u16,
    /// When set, prediction requests and responses are also appended to this file
    pub log_file: Option<PathBuf>,
    /// Reject records outside clinical ranges with a 400 (PCOS_STRICT_RANGES)
    pub strict_ranges: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_file: None,
            strict_ranges: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed port is an error.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PCOS_PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PCOS_PORT is not a valid port: {raw:?}"))?,
            Err(_) => defaults.port,
        };

        let strict_ranges = matches!(
            env::var("PCOS_STRICT_RANGES").as_deref().map(str::trim),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Ok(Self {
            bind: env::var("PCOS_BIND").unwrap_or(defaults.bind),
            port,
            log_file: env::var("PCOS_LOG_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            strict_ranges,
        })
    }
}
