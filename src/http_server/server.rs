//! HTTP server combining the entity routers.
//!
//! All routes are nested under `/api`, with a health check at the root.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::store::{MemoryStore, RecordStore};

use super::config::HttpServerConfig;
use super::course_routes::course_routes;
use super::grade_routes::grade_routes;
use super::state::AppState;
use super::student_routes::student_routes;

/// HTTP server for the gradebook API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration, backed by a fresh
    /// in-memory store.
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config, Arc::new(MemoryStore::new()));
        Self { config, router }
    }

    /// Build the combined router over the given store
    pub fn build_router<S: RecordStore + 'static>(
        config: &HttpServerConfig,
        store: Arc<S>,
    ) -> Router {
        let state = Arc::new(AppState::new(store));

        let api = student_routes(state.clone())
            .merge(course_routes(state.clone()))
            .merge(grade_routes(state));

        Router::new()
            .route("/health", get(health_handler))
            .nest("/api", api)
            .layer(Self::cors_layer(config))
    }

    /// CORS policy from config: configured origins get an explicit method
    /// list with credentials; an empty origin list falls back to permissive
    /// mode for development.
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("HTTP_SERVER_START", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
