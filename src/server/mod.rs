//! Showcase server setup and initialization

pub mod api;
pub mod error;
pub mod pages;
pub mod state;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;

pub use state::AppState;

/// Build the router: pages, diagnostics endpoints, 404 fallback
pub fn router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::root))
        .route("/proto", get(pages::index))
        .route("/proto/components/:slug", get(pages::component))
        .route("/proto/prototypes/:slug", get(pages::prototype))
        // Diagnostics
        .route("/api/registry", get(api::get_registry))
        .route("/api/validation", get(api::get_validation))
        .route("/api/coverage", get(api::get_coverage))
        .fallback(pages::fallback)
        .with_state(state)
}

/// Start the showcase server and serve until `shutdown_rx` fires
pub async fn start_server(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let app = router(state);

    tracing::info!("Starting showcase on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("Showcase listening on http://{}/proto", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Showcase server shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::Showcase;

    #[tokio::test]
    async fn test_serves_until_shutdown() {
        let state = AppState::new(Showcase::builtin().unwrap());
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(start_server(
            "127.0.0.1:0".parse().unwrap(),
            state,
            shutdown_rx,
        ));
        shutdown_tx.send(()).unwrap();

        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();
        let (_shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let err = start_server(addr, AppState::new(Showcase::builtin().unwrap()), shutdown_rx)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to bind"));
    }
}
