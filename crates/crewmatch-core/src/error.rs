//! Core domain errors.

use thiserror::Error;

/// Errors the assignment flow can surface.
///
/// Search, recommendation, grouping, and selection mutations are total and
/// never fail; only committing an assignment can.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// Commit attempted with nothing selected. Rejected before any external
    /// call is made.
    #[error("no workers selected")]
    EmptySelection,

    /// A commit is already in flight; the trigger stays disabled until it
    /// resolves.
    #[error("an assignment commit is already in flight")]
    CommitInFlight,

    /// The external commit call rejected or errored. The selection is left
    /// untouched for retry.
    #[error("assignment commit failed: {0}")]
    CommitFailed(String),
}
