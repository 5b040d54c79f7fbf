//! HTTP server initialization and runtime setup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::application::services::{AuthService, StaticTokenVerifier};
use crate::config::Config;
use crate::infrastructure::memory::MemoryUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory user store (empty on every start; nothing persists)
/// - The static token verifier
/// - The Axum HTTP server with the request pipeline
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed or bound
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let verifier = Arc::new(StaticTokenVerifier::new(config.api_token.clone()));
    let state = AppState {
        users: Arc::new(MemoryUserRepository::new()),
        auth: Arc::new(AuthService::new(verifier)),
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?e, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
