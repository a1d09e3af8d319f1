//! Creatorlink API server entry point.

use std::sync::Arc;

use creatorlink_api::config::AppConfig;
use creatorlink_api::error::AppError;
use creatorlink_api::routes;
use creatorlink_api::state::AppState;
use creatorlink_core::clock::SystemClock;
use creatorlink_core::id::RandomIdGenerator;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Creatorlink API server");

    let config = AppConfig::from_env()?;
    let store = config.open_store()?;
    let directory = config.load_directory()?;

    let app_state = AppState::new(
        store,
        config.resume_policy,
        directory,
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator::from_os_rng()),
    );

    // TODO: Replace CorsLayer::permissive() with the storefront origin once it is configurable.
    let app = routes::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!(%addr, resume_policy = %config.resume_policy, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
