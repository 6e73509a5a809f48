//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `8001`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `JOKES_PATH` — JSON dataset file (default: built-in dataset)
/// - `JOKE_SEED` — seed for reproducible selection (default: unseeded)
/// - `METRICS_ENABLED` — serve `/metrics` (default: `false`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub jokes_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub metrics_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            jokes_path: lookup("JOKES_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            seed: lookup("JOKE_SEED").and_then(|s| s.parse().ok()),
            metrics_enabled: lookup("METRICS_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.metrics_enabled),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            log_level: "info".to_string(),
            jokes_path: None,
            seed: None,
            metrics_enabled: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
