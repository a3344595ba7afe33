use tracing::info;

/// Wait for an interrupt signal.
///
/// This function will block until either:
/// - CTRL+C is received
/// - SIGTERM is received (Unix only)
///
/// The caller is expected to cancel status polling and restore the UI
/// to an interactive state before exiting.
pub async fn wait_for_interrupt() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received CTRL+C signal, stopping status polling...");
        }
        _ = terminate => {
            info!("Received SIGTERM signal, stopping status polling...");
        }
    }
}
