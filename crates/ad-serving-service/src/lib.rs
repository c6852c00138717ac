//! Ad Serving Service
//!
//! REST surface over the admatch engine. Advertisers post prepaid ads,
//! requesters are served the single best match against their private
//! profile, and read-only accessors expose quotes and catalogue lookups.
//!
//! ## Endpoints
//!
//! - `POST /api/ads` - Post a paid ad into the catalogue
//! - `POST /api/ads/serve` - Serve the best-matching ad for a profile
//! - `GET /api/ads/next-id` - Peek at the id the next post will receive
//! - `GET /api/ads/{id}` - Look up a catalogued record
//! - `GET /api/price/{impressions}` - Quote the price for an impression count
//! - `GET /health` - Health check
//!
//! Every request is serialized through a single engine mutex, so posts and
//! serves apply atomically and in a total order.

pub mod config;
pub mod handlers;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use handlers::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_handler))
        // Posting and serving
        .route("/api/ads", post(handlers::post_ad_handler))
        .route("/api/ads/serve", post(handlers::serve_ad_handler))
        // Read-only accessors
        .route("/api/ads/next-id", get(handlers::next_ad_id_handler))
        .route("/api/ads/{id}", get(handlers::get_ad_handler))
        .route("/api/price/{impressions}", get(handlers::quote_handler))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
