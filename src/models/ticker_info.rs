use serde::{Deserialize, Serialize};

use super::ticker_status::TickerStatus;
use crate::provider::{WorkerLifetime, WorkerProvider};
use crate::ticker::TickerStats;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TickerInfo {
    pub status: TickerStatus,
    pub ticks: u64,
    pub interval_ms: u64,
    pub worker_lifetime: WorkerLifetime,
    /// Next value the shared worker will log; only known for singleton workers.
    pub counter: Option<u64>,
    pub last_tick_ms: Option<u64>,
}

impl TickerInfo {
    pub fn snapshot(provider: &WorkerProvider, stats: &TickerStats, interval_ms: u64) -> Self {
        Self {
            status: if stats.is_running() {
                TickerStatus::Running
            } else {
                TickerStatus::Stopped
            },
            ticks: stats.ticks(),
            interval_ms,
            worker_lifetime: provider.lifetime(),
            counter: provider.singleton().map(|worker| worker.value()),
            last_tick_ms: stats.last_tick_ms(),
        }
    }
}
