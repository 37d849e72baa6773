use crate::ShutdownCoordinator;

use tokio::sync::watch;

/// Per-task handle for waiting on shutdown
pub struct ShutdownGuard {
    shutdown_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for the shutdown signal.
    ///
    /// Pends forever if every coordinator is dropped without signalling.
    pub async fn wait(&mut self) {
        let coordinator_gone = self.shutdown_rx.wait_for(|down| *down).await.is_err();
        if coordinator_gone {
            std::future::pending::<()>().await;
        }
    }

    /// Non-blocking check
    pub fn is_shutdown(&self) -> bool {
        *self.shutdown_rx.borrow()
    }
}
