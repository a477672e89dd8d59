//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the three relay routes
//! - Wire up middleware (request ID, tracing, panic recovery)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::relay::FeedFetcher;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: FeedFetcher,
    /// Parent span for handler events; handlers log through it rather than ambient state.
    pub span: Span,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let span = tracing::info_span!("relay", listen = %config.listen_address);
        Self::with_span(config, span)
    }

    /// Create a server whose handlers log under the given span.
    pub fn with_span(config: RelayConfig, span: Span) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            fetcher: FeedFetcher::new(config.clone()),
            span,
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(handlers::root))
            .route("/feed", get(handlers::feed))
            .route("/ping", get(handlers::ping))
            .with_state(state);
        Self::with_middleware(routes)
    }

    /// Wrap `routes` in the request-id, tracing and panic-recovery layers.
    ///
    /// A panicking handler becomes a 500 instead of a dropped connection.
    pub fn with_middleware(routes: Router) -> Router {
        routes.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                .layer(CatchPanicLayer::new()),
        )
    }

    /// Serve until a message arrives on `shutdown`, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
