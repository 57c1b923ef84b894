use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use salvo::affix_state;
use salvo::prelude::*;
use tracing::info;

use crate::config::HostConfig;
use crate::error::{HostError, Result};
use crate::handlers;
use crate::provider::WorkerProvider;
use crate::shutdown::Shutdown;
use crate::ticker::{self, TickerStats};

const GRACEFUL_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything the handlers and the ticker share.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<WorkerProvider>,
    pub stats: Arc<TickerStats>,
    pub shutdown: Shutdown,
    pub interval_ms: u64,
}

pub struct Host {
    config: HostConfig,
    state: AppState,
}

impl Host {
    pub fn build(config: HostConfig) -> Self {
        Lazy::force(&handlers::health::STARTED_AT);

        let state = AppState {
            provider: Arc::new(WorkerProvider::new(config.worker_lifetime)),
            stats: Arc::new(TickerStats::default()),
            shutdown: Shutdown::new(),
            interval_ms: config.tick_interval_ms,
        };
        Self { config, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn shutdown(&self) -> Shutdown {
        self.state.shutdown.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .hoop(affix_state::inject(self.state.clone()))
            .push(Router::with_path("checkhealth").get(handlers::health::check_health_api))
            .push(Router::with_path("ticker").get(handlers::ticker::get_ticker_api))
            .push(Router::with_path("exit").get(handlers::exit::exit_api))
    }

    /// Serves HTTP with the ticker running next to it until shutdown is
    /// triggered. Returns the number of ticks that completed.
    pub async fn run(self) -> Result<u64> {
        let addr = self.config.listen.clone();
        let acceptor = TcpListener::new(addr.clone())
            .try_bind()
            .await
            .map_err(|e| HostError::Bind {
                addr: addr.clone(),
                reason: e.to_string(),
            })?;

        let ticker = ticker::spawn_from_arg(
            Box::new(self.state.provider.clone()),
            self.config.tick_interval(),
            self.state.stats.clone(),
            self.state.shutdown.subscribe(),
        )?;

        let server = Server::new(acceptor);
        let handle = server.handle();
        let mut signal = self.state.shutdown.subscribe();
        tokio::spawn(async move {
            signal.wait().await;
            info!("Stopping server");
            handle.stop_graceful(Some(GRACEFUL_STOP_TIMEOUT));
        });

        info!("Listening on {}", addr);
        server.serve(self.router()).await;

        self.state.shutdown.trigger();
        let ticks = ticker.await?;
        info!("Host stopped, {} ticks completed", ticks);
        Ok(ticks)
    }
}
