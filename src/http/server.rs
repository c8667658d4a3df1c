//! HTTP server setup.
//!
//! # Responsibilities
//! - Own the game data client and the composed router
//! - Wire up middleware (CORS, request ID, real IP, tracing, panic recovery, timeout)
//! - Serve on a listener until the shutdown signal fires

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::Method, middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::config::ServerConfig;
use crate::http::middleware::{enforce_timeout, panic_response, real_ip};
use crate::http::request::MakeRequestUuidV4;
use crate::http::routes::routes;
use crate::observability::logging::make_request_span;
use crate::riot::GameDataClient;

/// Application state injected into handlers.
pub struct AppState<C> {
    pub client: Arc<C>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

/// HTTP server for the league API.
pub struct HttpServer<C> {
    router: Router,
    client: Arc<C>,
    config: ServerConfig,
}

impl<C: GameDataClient> HttpServer<C> {
    /// Create a new HTTP server owning `client`.
    pub fn new(config: ServerConfig, client: C) -> Self {
        let client = Arc::new(client);
        let state = AppState {
            client: Arc::clone(&client),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            client,
            config,
        }
    }

    /// Build the router with all middleware layers, innermost first.
    fn build_router(config: &ServerConfig, state: AppState<C>) -> Router {
        let timeout = Duration::from_secs(config.timeouts.request_secs);

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::HEAD, Method::POST]);

        routes::<C>()
            .with_state(state)
            .layer(middleware::from_fn_with_state(timeout, enforce_timeout))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(middleware::from_fn(real_ip))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(cors)
    }

    /// The composed router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The game data client this server delegates to.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are allowed to finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
