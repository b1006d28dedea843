//! Graceful shutdown and mining cancellation.
//!
//! Subsystems watch a shared signal; the miner additionally shares an
//! atomic flag that the synchronous nonce search polls between windows,
//! so an in-flight search aborts shortly after shutdown is triggered.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::watch;

/// Fans a shutdown signal out to node subsystems.
///
/// Async subsystems `changed().await` on a subscribed receiver; the
/// blocking nonce search polls the cancellation flag instead.
pub struct ShutdownController {
    tx: watch::Sender<bool>,
    cancel: Arc<AtomicBool>,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            tx,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a receiver that resolves once shutdown is triggered.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// The flag an in-flight nonce search polls.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Trigger shutdown programmatically.
    pub fn shutdown(&self) {
        self.cancel.store(true, Ordering::Relaxed);
        let _ = self.tx.send(true);
    }

    /// Wait for SIGTERM or SIGINT, then trigger shutdown.
    pub async fn wait_for_signal(&self) {
        let ctrl_c = signal::ctrl_c();

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => { tracing::info!("received SIGINT, shutting down"); }
            _ = terminate => { tracing::info!("received SIGTERM, shutting down"); }
        }

        self.shutdown();
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}
