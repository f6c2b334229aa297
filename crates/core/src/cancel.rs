//! Cooperative cancellation for network-bound providers.

use std::sync::Arc;
use tokio::sync::watch;

/// A cloneable cancellation signal.
///
/// All clones observe the same state; once cancelled a signal stays cancelled.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Fire the signal, waking every task awaiting [`CancelSignal::cancelled`]
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the signal has been cancelled
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        let fired = rx.wait_for(|cancelled| *cancelled).await.map(|_| ()).is_ok();
        if !fired {
            // The sender lives as long as `self`, so this only happens during teardown.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}
