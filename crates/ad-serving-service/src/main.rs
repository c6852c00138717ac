//! Ad Serving Service
//!
//! REST API entry point for the confidential ad catalogue and matching engine

use ad_serving_service::{create_router, AppState, Config};
use admatch_engine::AdEngine;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ad_serving_service=debug,admatch_engine=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    info!("Starting Ad Serving Service");
    info!(
        "Price per impression: {}",
        config.schedule.price_per_impression
    );
    info!("Listening on {}:{}", config.host, config.port);

    // Engine state; one instance per process, serialized behind the mutex
    let engine = AdEngine::new(config.schedule, config.weights);
    let state = AppState::new(engine);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    info!("Ad Serving Service running on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
