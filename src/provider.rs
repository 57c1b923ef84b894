use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::worker::CounterWorker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkerLifetime {
    /// One worker for the whole process.
    #[default]
    Singleton,
    /// One worker per scope.
    Scoped,
    /// A new worker on every resolve.
    Transient,
}

impl Display for WorkerLifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerLifetime::Singleton => write!(f, "singleton"),
            WorkerLifetime::Scoped => write!(f, "scoped"),
            WorkerLifetime::Transient => write!(f, "transient"),
        }
    }
}

#[derive(Debug)]
pub struct WorkerProvider {
    lifetime: WorkerLifetime,
    singleton: Option<Arc<CounterWorker>>,
    next_scope_id: AtomicU64,
}

impl WorkerProvider {
    pub fn new(lifetime: WorkerLifetime) -> Self {
        let singleton = match lifetime {
            WorkerLifetime::Singleton => Some(Arc::new(CounterWorker::new())),
            WorkerLifetime::Scoped | WorkerLifetime::Transient => None,
        };
        Self {
            lifetime,
            singleton,
            next_scope_id: AtomicU64::new(0),
        }
    }

    pub fn lifetime(&self) -> WorkerLifetime {
        self.lifetime
    }

    pub fn singleton(&self) -> Option<&Arc<CounterWorker>> {
        self.singleton.as_ref()
    }

    pub fn create_scope(&self) -> WorkerScope<'_> {
        let id = self.next_scope_id.fetch_add(1, Ordering::Relaxed);
        trace!(scope = id, "scope created");
        WorkerScope {
            id,
            provider: self,
            scoped: OnceCell::new(),
        }
    }
}

pub struct WorkerScope<'a> {
    id: u64,
    provider: &'a WorkerProvider,
    scoped: OnceCell<Arc<CounterWorker>>,
}

impl WorkerScope<'_> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn resolve(&self) -> Arc<CounterWorker> {
        if let Some(worker) = &self.provider.singleton {
            return worker.clone();
        }
        match self.provider.lifetime {
            WorkerLifetime::Scoped => self
                .scoped
                .get_or_init(|| Arc::new(CounterWorker::new()))
                .clone(),
            _ => Arc::new(CounterWorker::new()),
        }
    }
}

impl Drop for WorkerScope<'_> {
    fn drop(&mut self) {
        trace!(scope = self.id, "scope released");
    }
}
