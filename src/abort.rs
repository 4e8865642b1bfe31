//! Best-effort cancellation for in-flight catalog loads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owner side of an abort signal. Held by whoever tears the load down.
pub struct AbortController {
    aborted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl AbortController {
    pub fn new() -> Self {
        Self {
            aborted: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Abort every load observing this controller. Idempotent.
    pub fn abort(&self) {
        if !self.aborted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Abort signalled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Create a signal for handing to loads.
    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            aborted: Arc::clone(&self.aborted),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for AbortController {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of an [`AbortController`].
#[derive(Clone)]
pub struct AbortSignal {
    aborted: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Resolve once the controller aborts; immediately if it already has.
    pub async fn aborted(&self) {
        // Register interest before reading the flag, otherwise an abort landing
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_aborted() {
            return;
        }
        notified.await;
    }
}
