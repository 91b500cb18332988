//! Listener binding and the serve loop.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::AppError;

/// Binds the listening socket. There is no retry: a port that is already in
/// use is returned as `AppError::Server`.
///
/// # Errors
///
/// Returns `AppError::Server` if the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(addr).await?;
    Ok(listener)
}

/// Serves `app` on `listener` until Ctrl-C or SIGTERM is received.
///
/// # Errors
///
/// Returns `AppError::Server` if the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
