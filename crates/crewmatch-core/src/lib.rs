//! Crewmatch Core Domain Types
//!
//! This crate contains the pure domain of Crewmatch with no dependencies on:
//! - Network/HTTP
//! - Async runtime
//! - Storage
//!
//! It covers the task catalog and its prefix search, the worker directory
//! and its skill-ranked recommendations, the accumulating selection an
//! operator builds across tasks, and the grouped summary derived from it.

pub mod error;
pub mod ids;
pub mod selection;
pub mod summary;
pub mod task;
pub mod worker;

// Re-export commonly used types
pub use error::AssignmentError;
pub use ids::{TaskId, WorkerId};
pub use selection::{SelectedWorker, SelectionStore};
pub use summary::{GroupedSummary, TaskGroup};
pub use task::{TaskCatalog, TaskType};
pub use worker::{Availability, WorkerDirectory, WorkerRecord};
