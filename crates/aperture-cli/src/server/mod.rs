//! HTTP server startup and graceful shutdown.

mod http_server;
mod lifecycle;
mod shutdown;

use std::io;

use axum::Router;

use crate::config::ServerConfig;

/// Serves `app` until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
/// while running.
pub async fn serve(app: Router, config: ServerConfig) -> io::Result<()> {
    http_server::serve_http(app, config).await
}
