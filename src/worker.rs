use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Counts its own invocations and logs each count.
#[derive(Debug, Default)]
pub struct CounterWorker {
    counter: AtomicU64,
}

impl CounterWorker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs the current value at debug level, then increments it.
    pub fn execute(&self) {
        let value = self.counter.fetch_add(1, Ordering::Relaxed);
        debug!("{}", value);
    }

    /// The value the next `execute` will log.
    pub fn value(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}
