//! Shared application state.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crewmatch_core::{SelectionStore, TaskCatalog, WorkerDirectory};

use crate::committer::{CommitSink, LogCommitSink};

/// Shared application state.
///
/// The catalog and directory are fixed reference sets loaded once at
/// startup; only the selection mutates during a session. HTTP concurrency is
/// serialized through the selection lock, so mutations observe the store in
/// a single total order.
pub struct AppState {
    /// Task catalog, fixed for the session.
    pub catalog: TaskCatalog,

    /// Worker directory, fixed for the session.
    pub directory: WorkerDirectory,

    /// The operator's accumulating selection.
    pub selection: RwLock<SelectionStore>,

    /// Held for the duration of an in-flight commit. A failed `try_lock`
    /// means an earlier commit is unresolved and the attempt is rejected.
    pub commit_gate: Mutex<()>,

    /// External boundary assignments are delivered through.
    pub sink: Arc<dyn CommitSink>,

    /// Successful commits since startup.
    pub commits_succeeded: AtomicU64,

    /// Failed commits since startup.
    pub commits_failed: AtomicU64,
}

impl AppState {
    /// Create a new AppState wrapped in Arc, with commits going to the log.
    pub fn new(catalog: TaskCatalog, directory: WorkerDirectory) -> Arc<Self> {
        Self::with_sink(catalog, directory, Arc::new(LogCommitSink))
    }

    /// Create a new AppState with a specific commit sink.
    pub fn with_sink(
        catalog: TaskCatalog,
        directory: WorkerDirectory,
        sink: Arc<dyn CommitSink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            catalog,
            directory,
            selection: RwLock::new(SelectionStore::new()),
            commit_gate: Mutex::new(()),
            sink,
            commits_succeeded: AtomicU64::new(0),
            commits_failed: AtomicU64::new(0),
        })
    }

    /// Number of workers currently selected.
    pub async fn selection_size(&self) -> usize {
        self.selection.read().await.len()
    }
}
