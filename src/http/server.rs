//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the dispatch handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve connections until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::validation::validate_config;
use crate::config::{ConfigError, ResolverConfig};
use crate::http::handlers::dispatch;
use crate::http::request::UuidRequestId;
use crate::registry::Registry;
use crate::render::Renderer;
use crate::routing::{HostResolver, Router as PackageRouter};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<PackageRouter>,
    pub hosts: Arc<HostResolver>,
    pub renderer: Arc<Renderer>,
}

/// HTTP server for the resolver.
pub struct HttpServer {
    router: Router,
    config: ResolverConfig,
}

impl HttpServer {
    /// Server over the compiled-in registry and templates.
    pub fn new(config: ResolverConfig) -> Result<Self, ConfigError> {
        Self::with_parts(config, Registry::builtin(), Renderer::new())
    }

    /// Server over an explicit registry and renderer.
    ///
    /// The configuration is validated here, so a bad header name or a zero
    /// timeout is reported instead of silently changing behavior.
    pub fn with_parts(
        config: ResolverConfig,
        registry: Registry,
        renderer: Renderer,
    ) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let state = AppState {
            router: Arc::new(PackageRouter::new(Arc::new(registry))),
            hosts: Arc::new(HostResolver::from_config(&config.host)),
            renderer: Arc::new(renderer),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ResolverConfig, state: AppState) -> Router {
        // The internal router decides between home and package pages,
        // so every path and method reaches the same handler.
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are allowed to finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}
