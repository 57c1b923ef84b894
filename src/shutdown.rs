use std::sync::Arc;

use tokio::sync::watch;

/// Process-wide stop switch shared by the server, the ticker and the handlers.
#[derive(Clone, Debug)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
            _tx: self.tx.clone(),
        }
    }

    /// Routes Ctrl-C into this handle. Can only be installed once per process.
    pub fn install_ctrlc(&self) -> crate::error::Result<()> {
        let shutdown = self.clone();
        ctrlc::set_handler(move || {
            tracing::info!("Interrupt received, shutting down");
            shutdown.trigger();
        })?;
        Ok(())
    }
}

/// Holds its own sender, so dropping every `Shutdown` never reads as a stop.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
    _tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been triggered.
    pub async fn wait(&mut self) {
        if self.rx.wait_for(|stopped| *stopped).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
