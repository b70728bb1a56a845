use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancellation scope shared between the orchestrator and its in-flight calls.
///
/// Once cancelled it stays cancelled; there is no way to reopen a scope.
#[derive(Clone, Debug, Default)]
pub struct CancelScope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the scope and wake every task waiting on it.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("cancellation scope closed");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the scope is cancelled.
    pub async fn cancelled(&self) {
        // Register interest before checking the flag so a cancel() landing in
        // between is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
