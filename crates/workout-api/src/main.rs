//! Workout API server entry point.

use std::sync::Arc;

use workout_api::config::Config;
use workout_api::error::AppError;
use workout_api::{routes, server, state, telemetry};
use workout_core::clock::SystemClock;

/// Opens storage, binds and serves until shutdown.
async fn run(config: &Config) -> Result<(), AppError> {
    // Open storage and build application state.
    let workout_repository = state::connect_repository(config.database_url.as_deref()).await?;
    let app_state = state::AppState::new(Arc::new(SystemClock), workout_repository);

    // Build router.
    let app = routes::app(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    let listener = server::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    server::serve(listener, app).await
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber.
    let telemetry = telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting workout API server");

    // Spans are flushed on every exit path, including startup failures.
    let result = run(&config).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "workout API server failed");
    }
    telemetry.shutdown();
    result
}
