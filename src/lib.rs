pub mod config;
pub mod error;
pub mod handlers;
pub mod host;
pub mod logger;
pub mod models;
pub mod provider;
pub mod shutdown;
pub mod ticker;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::HostConfig;
pub use error::{HostError, Result};
pub use host::{AppState, Host};
pub use provider::{WorkerLifetime, WorkerProvider, WorkerScope};
pub use shutdown::{Shutdown, ShutdownSignal};
pub use ticker::{Ticker, TickerStats};
pub use worker::CounterWorker;
