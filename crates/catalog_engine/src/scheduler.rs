use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use catalog_logging::catalog_trace;

/// Runs at most one pending carousel advance on a tokio runtime.
///
/// Scheduling replaces whatever was pending. Cancellation is unconditional
/// and also happens on drop, so no callback outlives its scheduler.
#[derive(Debug, Default)]
pub struct AutoplayScheduler {
    pending: Option<CancellationToken>,
}

impl AutoplayScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `on_fire(generation)` after `delay` unless cancelled first.
    pub fn schedule<F>(&mut self, runtime: &Handle, generation: u64, delay: Duration, on_fire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    catalog_trace!("autoplay gen={} cancelled", generation);
                }
                _ = tokio::time::sleep(delay) => on_fire(generation),
            }
        });
        self.pending = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for AutoplayScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
