use std::future::pending;

use tokio::signal;

/// Completes when the process is asked to stop (Ctrl+C, or SIGTERM on unix).
/// A signal that cannot be registered is logged and never fires.
pub async fn shutdown_signal() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                tracing::error!("Cannot listen for Ctrl+C: {}", e);
                pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                tracing::error!("Cannot listen for SIGTERM: {}", e);
                pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::warn!(signal = received, "Shutdown requested, draining connections");
}
