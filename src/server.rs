// ABOUTME: HTTP server assembly and lifecycle for the relay
// ABOUTME: Builds the router with its middleware stack, binds the listener, and handles graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use http::HeaderName;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use crate::constants::defaults::MAX_REQUEST_BODY_BYTES;
use crate::errors::{AppError, AppResult};
use crate::middleware::{log_response, make_request_span, setup_cors, REQUEST_ID_HEADER};
use crate::resources::ServerResources;
use crate::routes::{FitnessPlanRoutes, HealthRoutes};

/// Build the complete application router
///
/// Layer order, outermost first: request ID assignment, tracing, request ID
/// propagation to the response, CORS.
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(FitnessPlanRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(make_request_span)
                        .on_response(log_response),
                )
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(cors),
        )
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> AppResult<()> {
    let bind_address = resources.config.bind_address();
    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {bind_address}")).with_source(e)
    })?;
    serve(listener, resources).await
}

/// Serve on an already-bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> AppResult<()> {
    let local_addr = listener
        .local_addr()
        .map_err(|e| AppError::internal("Listener has no local address").with_source(e))?;
    let app = build_router(resources);

    info!("Fitness plan relay listening on http://{local_addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("HTTP server error").with_source(e))?;
    info!("Fitness plan relay shut down");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl-C handler");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
