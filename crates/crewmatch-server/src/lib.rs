//! Crewmatch Assignment Service Library
//!
//! This crate hosts the core recommendation/selection engine behind an HTTP
//! API: shared session state, the startup dataset, the commit boundary, and
//! observability.

pub mod committer;
pub mod config;
pub mod dataset;
pub mod http;
pub mod metrics;
pub mod state;

pub use committer::{CommitOutcome, CommitSink, Committer};
pub use config::Config;
pub use dataset::Dataset;
pub use state::AppState;
