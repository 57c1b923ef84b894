use std::time::Duration;

use clap::Parser;

use crate::provider::WorkerLifetime;

#[derive(Debug, Clone, Parser)]
#[command(name = "ticker-core")]
#[command(about = "Web host with a counter ticking in the background")]
pub struct HostConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "TICKER_LISTEN", default_value = "127.0.0.1:13088")]
    pub listen: String,

    /// Delay between two ticks, in milliseconds
    #[arg(
        long,
        env = "TICKER_INTERVAL_MS",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_interval_ms: u64,

    /// How long a resolved counter worker lives
    #[arg(long, env = "TICKER_WORKER_LIFETIME", value_enum, default_value_t = WorkerLifetime::Singleton)]
    pub worker_lifetime: WorkerLifetime,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl HostConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:13088".to_string(),
            tick_interval_ms: 1000,
            worker_lifetime: WorkerLifetime::Singleton,
            verbose: false,
        }
    }
}
