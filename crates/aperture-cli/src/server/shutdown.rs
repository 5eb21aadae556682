//! Shutdown signals and the bounded connection drain.

use std::future::{Future, pending};
use std::io;
use std::time::Duration;

use tokio::signal::ctrl_c;
use tokio::sync::oneshot;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;

/// Resolves once SIGINT or, on Unix, SIGTERM is received.
///
/// A handler that fails to install never resolves, so the other signal
/// still works.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = ctrl_c().await {
            tracing::warn!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %error,
                "Cannot listen for SIGINT"
            );
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    error = %error,
                    "Cannot listen for SIGTERM"
                );
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    let received = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        signal = received,
        "Shutdown signal received, draining connections"
    );
}

/// Drives `server` to completion, giving up `timeout` after `signaled`
/// fires.
///
/// A dropped sender means no signal will come; the server then runs until
/// it stops on its own.
pub async fn drain_within<F>(
    server: F,
    signaled: oneshot::Receiver<()>,
    timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = io::Result<()>>,
{
    let deadline = async {
        if signaled.await.is_ok() {
            tokio::time::sleep(timeout).await;
        } else {
            pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            tracing::warn!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                timeout_secs = timeout.as_secs(),
                "Shutdown timeout elapsed, dropping open connections"
            );
            Ok(())
        }
    }
}
