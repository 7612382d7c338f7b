use anyhow::{Context, Result};
use axum::Router;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use crate::config::Config;
use crate::directory::Directory;
use crate::events;

pub mod router;
pub mod handlers;

pub struct AppState {
    pub directory: Directory,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        Self { directory }
    }
}

/// How long in-flight requests may take to finish after a shutdown signal.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Bind `0.0.0.0:<port>` and serve until SIGINT or SIGTERM.
pub async fn serve(cfg: Config, directory: Directory) -> Result<()> {
    let bind_addr = cfg.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    run(
        listener,
        Arc::new(AppState::new(directory)),
        shutdown_signal(),
        DRAIN_TIMEOUT,
    )
    .await
}

/// Serve on an already bound listener until `shutdown` resolves, then drain
/// in-flight requests for at most `drain_timeout`. Connections still open
/// after the deadline are abandoned.
pub async fn run<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
    drain_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = build_app(state);

    tracing::info!(event = events::SYSTEM_STARTUP, "User service listening on http://{}", addr);

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = signalled_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    // `biased` polls the server first, so a finished server always wins over
    // the sender being dropped with it.
    tokio::select! {
        biased;
        res = &mut server => res?,
        _ = signalled_rx => {
            match tokio::time::timeout(drain_timeout, &mut server).await {
                Ok(res) => res?,
                Err(_) => {
                    tracing::warn!(
                        event = events::SYSTEM_SHUTDOWN,
                        "Connections still open after {:?}, forcing shutdown",
                        drain_timeout
                    );
                }
            }
        }
    }

    tracing::info!(event = events::SYSTEM_SHUTDOWN, "User service stopped");
    Ok(())
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(router::routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, draining connections");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LogCapture;

    #[tokio::test]
    async fn test_startup_logs_listening_address_once() {
        let logs = LogCapture::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(AppState::new(Directory::seeded()));

        // Shut down right away: only the startup and stop lines are expected
        run(listener, state, async {}, Duration::from_secs(1))
            .await
            .unwrap();

        let startup = logs.events(events::SYSTEM_STARTUP);
        assert_eq!(startup.len(), 1);
        assert_eq!(
            startup[0]["fields"]["message"],
            format!("User service listening on http://{}", addr)
        );

        let shutdown = logs.events(events::SYSTEM_SHUTDOWN);
        assert_eq!(shutdown.len(), 1);
        assert_eq!(shutdown[0]["fields"]["message"], "User service stopped");
    }
}
