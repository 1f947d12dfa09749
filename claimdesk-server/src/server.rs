//! The access-control HTTP server

use crate::builder::AccessServerBuilder;
use crate::error::ServerResult;
use crate::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use claimdesk_rbac::AccessControl;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// HTTP sidecar exposing the access guard to non-Rust front ends.
pub struct AccessServer {
    access: AppState,
    bind_address: String,
    port: u16,
    shutdown_tx: watch::Sender<()>,
    shutdown_rx: watch::Receiver<()>,
}

impl AccessServer {
    /// Create a new builder
    pub fn builder() -> AccessServerBuilder {
        AccessServerBuilder::new()
    }

    pub(crate) fn new(access: AccessControl, bind_address: String, port: u16) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(());
        Self {
            access: Arc::new(access),
            bind_address,
            port,
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// The guard answering requests
    pub fn access_control(&self) -> &AccessControl {
        &self.access
    }

    /// `host:port` the server binds to
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Routes with tracing and CORS layers applied
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/access/menu", post(handlers::menu))
            .route("/api/access/capability", get(handlers::capability))
            .route("/api/access/label", get(handlers::label))
            .route("/api/access/permissions", get(handlers::permissions))
            .route("/api/access/authorize", post(handlers::authorize))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.access.clone())
    }

    /// Trigger a graceful shutdown of a running server
    pub fn shutdown(&self) {
        // No receiver left means the server is not running
        let _ = self.shutdown_tx.send(());
    }

    /// Serve until [`shutdown`](Self::shutdown), Ctrl+C or SIGTERM.
    pub async fn run(&self) -> ServerResult<()> {
        let addr = self.address();
        info!("Starting access-control server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("HTTP server listening on {}", addr);

        let mut shutdown_rx = self.shutdown_rx.clone();
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_rx.changed() => info!("Shutdown requested"),
                    _ = shutdown_signal() => {}
                }
            })
            .await?;

        info!("Access-control server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
            Err(err) => {
                error!("Unable to listen for Ctrl+C: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown");
            }
            Err(err) => {
                error!("Unable to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
