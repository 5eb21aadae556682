//! Plain HTTP server.

use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;
use crate::server::lifecycle::serve_with_shutdown;
use crate::server::shutdown::{drain_within, shutdown_signal};

/// Binds the configured address and serves HTTP.
///
/// On SIGINT or SIGTERM the listener closes and in-flight requests get
/// `SHUTDOWN_TIMEOUT` to finish before the remaining connections are dropped.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> io::Result<()> {
    let server_addr = server_config.server_addr();
    let shutdown_timeout = server_config.shutdown_timeout();

    serve_with_shutdown(&server_config, move || async move {
        let listener = TcpListener::bind(server_addr).await?;

        tracing::info!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %server_addr,
            "HTTP server bound and ready"
        );

        let (signaled_tx, signaled_rx) = oneshot::channel();
        let signal = async move {
            shutdown_signal().await;
            let _ = signaled_tx.send(());
        };

        let server = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(signal)
        .into_future();

        drain_within(server, signaled_rx, shutdown_timeout).await
    })
    .await
}
