// ABOUTME: HTTP server assembly for the advisory API
// ABOUTME: Builds the axum router with its middleware stack and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! Server assembly
//!
//! Layer order, outermost first: request id assignment, CORS, request id
//! propagation, tracing, body limit, timeout, panic capture.

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, request_id_header, setup_cors, MakeRequestUuid};
use crate::resources::AdvisorResources;
use crate::routes::{HealthRoutes, NutritionRoutes};
use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Response, Uri};
use axum::response::IntoResponse;
use axum::Router;
use nutrilens_core::errors::AppError;
use std::any::Any;
#[cfg(not(unix))]
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, Span};

/// Build the complete application router
///
/// Every route shares the same `AdvisorResources`; unknown paths answer with
/// the standard `RESOURCE_NOT_FOUND` error envelope.
pub fn build_router(resources: Arc<AdvisorResources>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(resources))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(config.http.request_timeout()))
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(create_request_span::<Body>)
                .on_response(record_response),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(setup_cors(config))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

/// Bind the configured address and serve until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while running
pub async fn run(config: &ServerConfig, resources: Arc<AdvisorResources>) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        address = %address,
        models_loaded = resources.models_loaded(),
        "NutriLens advisory API listening"
    );

    let app = build_router(resources, config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("NutriLens advisory API stopped");
    Ok(())
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Request handler panicked");

    AppError::internal("Internal server error").into_response()
}

fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status_code", response.status().as_u16());
    info!(
        status = response.status().as_u16(),
        latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
        "request completed"
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
