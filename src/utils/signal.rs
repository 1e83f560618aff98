use tokio::signal;

/// Resolves on Ctrl+C so axum can stop accepting and drain in-flight requests.
pub async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        crate::error::log_error(&e);
        return;
    }

    #[cfg(not(windows))]
    println!();
    tracing::info!("Ctrl+C received. Please wait, finishing in-flight requests.");
}
