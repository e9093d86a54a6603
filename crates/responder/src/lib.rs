//! Single-route HTTP responder.
//!
//! Answers `GET /` with a fixed JSON payload and leaves every other
//! method and path to the framework defaults.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use config::Config;
pub use error::{Result, ServerError};

/// Tracing target of the startup event.
pub const STARTUP_TARGET: &str = "responder::startup";

/// Builds the log filter from `directives`, falling back to `info` when they
/// do not parse. The startup event is always enabled at `info`.
pub fn log_filter(directives: &str) -> EnvFilter {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));
    match format!("{STARTUP_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new().route("/", get(routes::root::get))
}

/// Binds a TCP listener on `addr`.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves the application on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(
        target: STARTUP_TARGET,
        port = local.port(),
        "server running on port {}",
        local.port()
    );

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn start<F>(config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(&config.addr()).await?;
    serve(listener, shutdown).await
}
