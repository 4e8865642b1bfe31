//! Injectable delay used to simulate login latency.

use std::future::Future;
use std::time::Duration;

/// Source of the simulated network latency.
///
/// Production uses [`TokioDelay`]; tests substitute a delay they release by
/// hand.
pub trait Delay: Send + Sync + 'static {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Wall-clock delay backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
