//! Server bootstrap
//!
//! Wires catalog, state manager, and optional recommender into the axum
//! router and serves until ctrl-c.

use crate::api;
use crate::core::{Config, ServerState};
use crate::orders::OrdersManager;
use crate::services::{CatalogService, GeminiRecommender, Recommender};
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with all middleware applied
pub fn build_router(state: ServerState) -> Router {
    api::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Assemble shared state from configuration
pub fn build_state(config: Config) -> anyhow::Result<ServerState> {
    let catalog = Arc::new(match &config.catalog_path {
        Some(path) => CatalogService::from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => CatalogService::embedded().context("Embedded catalog is invalid")?,
    });
    tracing::info!(restaurants = catalog.len(), "Catalog loaded");

    let manager = OrdersManager::new(catalog.clone())
        .with_reward_seed(config.reward_seed_orders, config.reward_seed_balance);

    let recommender: Option<Arc<dyn Recommender>> = match &config.gemini_api_key {
        Some(key) => {
            tracing::info!(model = %config.gemini_model, "Recommendation service enabled");
            Some(Arc::new(GeminiRecommender::new(
                key.clone(),
                config.gemini_model.clone(),
                config.gemini_base_url.clone(),
            )))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, recommendation service disabled");
            None
        }
    };

    Ok(ServerState {
        config,
        catalog,
        manager,
        recommender,
    })
}

/// Run the server until shutdown
pub async fn run(config: Config) -> anyhow::Result<()> {
    let port = config.http_port;
    let state = build_state(config)?;
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Court server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Court server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        return;
    }
    tracing::info!("Shutdown signal received");
}
