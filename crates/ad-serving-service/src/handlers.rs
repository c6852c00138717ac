//! API request handlers for the ad serving surface

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use admatch_common::{AdId, Error};
use admatch_engine::AdEngine;

use crate::models::{
    AdResponse, NextAdIdResponse, PostAdRequest, PostAdResponse, QuoteResponse, ServeAdRequest,
    ServeAdResponse,
};

/// Shared application state
///
/// The single mutex is the serialization boundary: every post and serve
/// applies against the engine atomically and in a total order.
pub struct AppState {
    pub engine: Mutex<AdEngine>,
}

impl AppState {
    /// Create application state around a configured engine
    pub fn new(engine: AdEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });

        (self.status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::InvalidQuantity | Error::InvalidProfile(_) => StatusCode::BAD_REQUEST,
            Error::InsufficientPayment { .. } => StatusCode::PAYMENT_REQUIRED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InactiveUser => StatusCode::FORBIDDEN,
            Error::Exhausted(_) | Error::NoInventory => StatusCode::CONFLICT,
        };

        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let engine = state.engine.lock().await;

    Json(serde_json::json!({
        "status": "healthy",
        "service": "ad-serving-service",
        "active_ads": engine.active_count(),
    }))
}

/// Post a paid ad into the catalogue
pub async fn post_ad_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PostAdRequest>,
) -> Result<Json<PostAdResponse>, ApiError> {
    info!("Posting ad with {} impressions", payload.impressions);

    let mut engine = state.engine.lock().await;
    let ad_id = engine.post_ad(
        payload.targeting,
        payload.content_ref,
        payload.impressions,
        payload.payment,
    )?;

    Ok(Json(PostAdResponse { ad_id }))
}

/// Serve the best-matching ad for a requester profile
pub async fn serve_ad_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ServeAdRequest>,
) -> Result<Json<ServeAdResponse>, ApiError> {
    let mut engine = state.engine.lock().await;
    let served = engine.serve_ad(&payload.profile)?;

    info!("Served ad {} at score {}", served.ad_id, served.score);

    Ok(Json(ServeAdResponse {
        content_ref: served.content_ref,
    }))
}

/// Quote the price for an impression count
pub async fn quote_handler(
    State(state): State<Arc<AppState>>,
    Path(impressions): Path<u64>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let engine = state.engine.lock().await;
    let price = engine.quote(impressions)?;

    Ok(Json(QuoteResponse { impressions, price }))
}

/// Look up a catalogued record by id
pub async fn get_ad_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<AdResponse>, ApiError> {
    let engine = state.engine.lock().await;
    let ad = engine.ad(AdId(id))?;

    Ok(Json(AdResponse { ad }))
}

/// Peek at the id the next post will receive
pub async fn next_ad_id_handler(State(state): State<Arc<AppState>>) -> Json<NextAdIdResponse> {
    let engine = state.engine.lock().await;

    Json(NextAdIdResponse {
        next_ad_id: engine.next_ad_id(),
    })
}
