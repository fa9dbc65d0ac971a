//! Assignment commit boundary.
//!
//! The committer validates and snapshots the selection, hands it to an
//! external `CommitSink` exactly once, and clears the store only when the
//! sink confirms. A failed commit leaves the selection intact for retry; a
//! second commit while one is in flight is rejected rather than queued.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crewmatch_core::{AssignmentError, GroupedSummary, SelectedWorker};

use crate::state::AppState;

/// Error returned by a commit sink.
///
/// Carries the external system's message verbatim; the committer surfaces it
/// unchanged as `AssignmentError::CommitFailed`.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SinkError(String);

impl SinkError {
    /// Create a sink error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The external boundary an assignment is delivered through.
///
/// Implementations own their transport; the committer only cares that
/// delivery either confirms with a message or fails with one.
#[async_trait]
pub trait CommitSink: Send + Sync {
    /// Deliver the full selection to the external assignment system.
    async fn deliver(&self, selection: &[SelectedWorker]) -> Result<String, SinkError>;
}

/// Receipt for a successful commit.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// Confirmation message from the sink.
    pub message: String,

    /// Number of workers assigned.
    pub assigned_workers: usize,

    /// Number of distinct tasks they were assigned to.
    pub task_count: usize,

    /// When the commit resolved.
    pub committed_at: DateTime<Utc>,
}

/// Commits the accumulated selection through the state's sink.
pub struct Committer {
    state: Arc<AppState>,
}

impl Committer {
    /// Create a new Committer.
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Commit the current selection.
    ///
    /// Rejects with `EmptySelection` before touching the sink when nothing
    /// is selected, and with `CommitInFlight` while an earlier commit is
    /// unresolved. The selection lock is not held across the external call,
    /// so search and selection stay usable while a commit is in flight.
    pub async fn commit(&self) -> Result<CommitOutcome, AssignmentError> {
        let _gate = self
            .state
            .commit_gate
            .try_lock()
            .map_err(|_| AssignmentError::CommitInFlight)?;

        let snapshot: Vec<SelectedWorker> = {
            let selection = self.state.selection.read().await;
            if selection.is_empty() {
                return Err(AssignmentError::EmptySelection);
            }
            selection.selected().to_vec()
        };

        let summary = GroupedSummary::from_selection(&snapshot);
        info!(
            workers = snapshot.len(),
            tasks = summary.len(),
            "Committing assignment"
        );

        match self.state.sink.deliver(&snapshot).await {
            Ok(message) => {
                self.state.selection.write().await.clear();
                self.state.commits_succeeded.fetch_add(1, Ordering::Relaxed);
                info!(workers = snapshot.len(), "Assignment committed");
                Ok(CommitOutcome {
                    message,
                    assigned_workers: snapshot.len(),
                    task_count: summary.len(),
                    committed_at: Utc::now(),
                })
            }
            Err(e) => {
                self.state.commits_failed.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "Assignment commit failed - selection preserved");
                Err(AssignmentError::CommitFailed(e.to_string()))
            }
        }
    }
}

/// Sink that records the assignment to the log and confirms.
///
/// Used when no forwarding endpoint is configured (development mode).
pub struct LogCommitSink;

#[async_trait]
impl CommitSink for LogCommitSink {
    async fn deliver(&self, selection: &[SelectedWorker]) -> Result<String, SinkError> {
        let summary = GroupedSummary::from_selection(selection);
        for group in summary.groups() {
            let names: Vec<&str> = group
                .workers
                .iter()
                .map(|entry| entry.record.name.as_str())
                .collect();
            info!(task = %group.task, workers = %names.join(", "), "Assignment recorded");
        }
        Ok(format!("{} workers assigned", selection.len()))
    }
}

/// Sink that forwards the assignment to an external service as JSON.
pub struct HttpCommitSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCommitSink {
    /// Create a sink posting to `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SinkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SinkError::new(format!("failed to build commit client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CommitSink for HttpCommitSink {
    async fn deliver(&self, selection: &[SelectedWorker]) -> Result<String, SinkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&selection)
            .send()
            .await
            .map_err(|e| SinkError::new(format!("assignment service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SinkError::new(format!(
                "assignment service returned HTTP {status}"
            )));
        }

        Ok(format!("{} workers assigned", selection.len()))
    }
}
