//! Wine Quality Prediction server

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wine_quality::{config::Config, create_router, model::artifacts, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wine_quality=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Wine Quality server starting...");

    // Artifacts are required; no partial operation mode
    let paths = config.artifact_paths();
    let predictor = artifacts::shared(&paths).with_context(|| {
        format!(
            "failed to load artifacts (classifier: {}, scaler: {})",
            paths.classifier.display(),
            paths.scaler.display()
        )
    })?;

    let app = create_router(AppState { predictor });

    // Start server
    let addr = config.addr();
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
