//! # HTTP Server
//!
//! Combines the automobile routes with the health endpoint, CORS, and
//! request tracing, and serves the result.

use std::io;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::service::AutosService;
use crate::store::AutoStore;

use super::autos_routes::autos_routes;
use super::config::HttpServerConfig;

/// HTTP server for the record-management API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given service with default configuration
    pub fn new<S: AutoStore + 'static>(service: Arc<AutosService<S>>) -> Self {
        Self::with_config(HttpServerConfig::default(), service)
    }

    /// Create a server over the given service with custom configuration
    pub fn with_config<S: AutoStore + 'static>(
        config: HttpServerConfig,
        service: Arc<AutosService<S>>,
    ) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router<S: AutoStore + 'static>(
        config: &HttpServerConfig,
        service: Arc<AutosService<S>>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest("/api", autos_routes(service))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router, for serving or for driving in tests
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured address and serve until shutdown
    pub async fn serve(self) -> io::Result<()> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        info!(addr = %self.config.socket_addr(), "http server listening");
        axum::serve(listener, self.router).await
    }
}

/// GET /health
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
