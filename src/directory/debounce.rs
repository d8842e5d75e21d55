//! Schedule-replace debouncing on the tokio runtime.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs an action once input has been quiet for `delay`.
///
/// Each [`schedule`](Self::schedule) aborts the pending action, if any, and
/// starts a new timer, so at most one action is ever pending. Dropping the
/// debouncer cancels the pending action.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending action with `action`, to run after the delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending action without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Wait until the pending action, if any, has run.
    pub async fn wait(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }

    /// Whether an action is waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
