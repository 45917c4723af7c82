//! Wine Quality Prediction
//!
//! Single-page form that scores a red wine sample with a pre-trained
//! random forest.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     WINE QUALITY                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌──────────────────┐   ┌────────────────┐  │
//! │  │  Input     │   │  Feature         │   │  Predictor &   │  │
//! │  │  Collector │──▶│  Transformer     │──▶│  Presenter     │  │
//! │  │  (Axum)    │   │  (log1p, scaler) │   │  (forest, UI)  │  │
//! │  └────────────┘   └──────────────────┘   └────────────────┘  │
//! │                            ▲                     ▲           │
//! │                            └──── artifacts ──────┘           │
//! │                           (loaded once, read-only)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod model;
pub mod view;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};
use model::QualityPredictor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<QualityPredictor>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // HTML page
    let page_routes = Router::new()
        .route("/", get(handlers::form::index).post(handlers::form::submit));

    // JSON API
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/fields", get(handlers::predict::fields))
        .route("/api/v1/predict", post(handlers::predict::predict));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
