use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{HostError, Result};
use crate::provider::WorkerProvider;
use crate::shutdown::ShutdownSignal;

#[derive(Debug, Default)]
pub struct TickerStats {
    ticks: AtomicU64,
    last_tick_ms: AtomicU64,
    running: AtomicBool,
}

impl TickerStats {
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Unix milliseconds of the last completed tick.
    pub fn last_tick_ms(&self) -> Option<u64> {
        match self.last_tick_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => Some(ms),
        }
    }

    fn record_tick(&self) {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        self.last_tick_ms.store(now.max(1), Ordering::Relaxed);
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct Ticker {
    provider: Arc<WorkerProvider>,
    interval: Duration,
    stats: Arc<TickerStats>,
}

impl Ticker {
    pub fn new(provider: Arc<WorkerProvider>, interval: Duration) -> Self {
        Self::with_stats(provider, interval, Arc::new(TickerStats::default()))
    }

    pub fn with_stats(
        provider: Arc<WorkerProvider>,
        interval: Duration,
        stats: Arc<TickerStats>,
    ) -> Self {
        Self {
            provider,
            interval,
            stats,
        }
    }

    pub fn stats(&self) -> Arc<TickerStats> {
        self.stats.clone()
    }

    pub fn tick(&self) {
        let scope = self.provider.create_scope();
        scope.resolve().execute();
        drop(scope);
        self.stats.record_tick();
    }

    // Fixed delay after each tick, no catch-up for slow ones.
    pub async fn run(self, mut shutdown: ShutdownSignal) -> u64 {
        info!(
            "Ticker started, interval {:?}, worker lifetime {}",
            self.interval,
            self.provider.lifetime()
        );
        self.stats.running.store(true, Ordering::Relaxed);

        while !shutdown.is_triggered() {
            self.tick();
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.wait() => {
                    debug!("Shutdown signalled during wait");
                    break;
                }
            }
        }

        self.stats.running.store(false, Ordering::Relaxed);
        let ticks = self.stats.ticks();
        info!("Ticker stopped after {} ticks", ticks);
        ticks
    }

    pub fn spawn(self, shutdown: ShutdownSignal) -> JoinHandle<u64> {
        tokio::spawn(self.run(shutdown))
    }
}

/// `provider` must hold an `Arc<WorkerProvider>`; checked before anything is spawned.
pub fn spawn_from_arg(
    provider: Box<dyn Any + Send>,
    interval: Duration,
    stats: Arc<TickerStats>,
    shutdown: ShutdownSignal,
) -> Result<JoinHandle<u64>> {
    let provider = provider
        .downcast::<Arc<WorkerProvider>>()
        .map_err(|_| HostError::InvalidArgument {
            expected: "WorkerProvider",
            param: "provider",
        })?;

    Ok(Ticker::with_stats(*provider, interval, stats).spawn(shutdown))
}
