// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! device-relay - authenticated relay for device telemetry
//!
//! This service accepts JSON posts from devices holding a shared key and
//! forwards them to two third-party APIs: analytics events go to a
//! collection endpoint, payloads go to a version-controlled content store.

use axum::{
    extract::Request,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

mod auth;
mod body;
mod config;
mod error;
mod handlers;
mod models;
mod state;
mod upstream;

#[cfg(test)]
mod testing;

use config::Config;
use state::AppState;

fn create_router(state: Arc<AppState>) -> Router {
    // Relay routes only answer POST
    let relay_routes = Router::new()
        .route(
            "/collect",
            post(handlers::collect::collect).fallback(handlers::method_not_allowed),
        )
        .route(
            "/iot",
            post(handlers::storage::store).fallback(handlers::method_not_allowed),
        );

    // Browsers may read the status page; the relay routes stay POST-only,
    // so preflight OPTIONS there must reach the 405 fallback
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "request",
            id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .route("/status", get(handlers::status::status).layer(cors))
        .nest("/api", relay_routes)
        .layer(trace)
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse configuration
    let config = Config::parse_args();

    // Initialize logging
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.to_string())),
        )
        .init();

    let state = Arc::new(AppState::new(config.clone()));

    if config.device_key().is_none() {
        tracing::warn!("No device key configured - every relay request will be rejected");
    }
    if !state.telemetry_configured() {
        tracing::warn!("Telemetry relay is not fully configured");
    }
    if !state.storage_configured() {
        tracing::warn!("Storage proxy is not fully configured");
    }

    let app = create_router(state);

    // Bind to address
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("device-relay listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
