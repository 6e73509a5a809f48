//! HTTP server for the joke capability.
//!
//! Serves the capability descriptor and the joke call endpoint, with
//! structured logging (tracing) and optional Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use jokes::{DatasetError, JokeDataset, JokeSelector, RandomSource};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::mcp::AppState;

/// Creates the Axum application router.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn create_app(state: Arc<AppState>, metrics_handle: Option<PrometheusHandle>) -> Router {
    let mut app = Router::new()
        .route("/mcp/describe", get(routes::mcp::describe))
        .route("/mcp/call", post(routes::mcp::call))
        .with_state(state);

    if let Some(handle) = metrics_handle {
        let metrics_router = Router::new()
            .route("/metrics", get(routes::metrics::render))
            .with_state(handle);
        app = app.merge(metrics_router);
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
}

/// Builds the application state from configuration.
///
/// Loads the dataset from `jokes_path` when set, otherwise uses the built-in
/// one, and seeds the generator when `seed` is set.
pub fn create_state(config: &Config) -> Result<Arc<AppState>, DatasetError> {
    let dataset = match &config.jokes_path {
        Some(path) => JokeDataset::from_path(path)?,
        None => JokeDataset::builtin(),
    };

    let random = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::Thread,
    };

    tracing::info!(
        categories = dataset.len(),
        seeded = config.seed.is_some(),
        "joke dataset loaded"
    );

    Ok(Arc::new(AppState::new(JokeSelector::new(dataset), random)))
}
