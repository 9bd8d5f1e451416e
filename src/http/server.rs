//! # HTTP Server
//!
//! Builds the router once at startup and serves it. Trailing slashes are
//! stripped before routing, so `/drop/` and `/drop` hit the same handler.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::{middleware, Router, ServiceExt};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::store::DropStore;

use super::config::HttpServerConfig;
use super::cors::cors;
use super::routes::{drop_routes, AppState};

/// HTTP server for the drop box
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: DropStore) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(store: DropStore, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the router with the CORS and tracing layers applied
    fn build_router(store: DropStore) -> Router {
        let state = Arc::new(AppState { store });

        Router::new()
            .merge(drop_routes(state))
            .layer(middleware::from_fn(cors))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Get the full service with trailing-slash normalization applied
    pub fn into_service(self) -> NormalizePath<Router> {
        NormalizePathLayer::trim_trailing_slash().layer(self.router)
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");

        tracing::info!(%addr, "starting jsonbox server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(
            listener,
            ServiceExt::<Request>::into_make_service(self.into_service()),
        )
        .await?;

        Ok(())
    }
}
