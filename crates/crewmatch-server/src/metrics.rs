//! Prometheus metrics collection and formatting.
//!
//! This module provides metrics in Prometheus text exposition format.

use std::fmt::Write;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crewmatch_core::{Availability, GroupedSummary};

use crate::state::AppState;

/// Collect all metrics from AppState and format as Prometheus text.
pub async fn collect_metrics(state: &Arc<AppState>) -> String {
    let mut output = String::new();

    collect_directory_metrics(state, &mut output);
    collect_selection_metrics(state, &mut output).await;
    collect_commit_metrics(state, &mut output);

    output
}

/// Collect catalog and directory metrics.
fn collect_directory_metrics(state: &Arc<AppState>, output: &mut String) {
    // Count workers by availability
    let mut available = 0u64;
    let mut busy = 0u64;

    for worker in state.directory.iter() {
        match worker.availability {
            Availability::Available => available += 1,
            Availability::Busy => busy += 1,
        }
    }

    // Write Prometheus format
    writeln!(
        output,
        "# HELP crewmatch_catalog_tasks Number of task types in the catalog"
    )
    .ok();
    writeln!(output, "# TYPE crewmatch_catalog_tasks gauge").ok();
    writeln!(output, "crewmatch_catalog_tasks {}", state.catalog.len()).ok();

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP crewmatch_directory_workers Number of workers by availability"
    )
    .ok();
    writeln!(output, "# TYPE crewmatch_directory_workers gauge").ok();
    writeln!(
        output,
        "crewmatch_directory_workers{{availability=\"available\"}} {available}"
    )
    .ok();
    writeln!(
        output,
        "crewmatch_directory_workers{{availability=\"busy\"}} {busy}"
    )
    .ok();
}

/// Collect selection metrics.
async fn collect_selection_metrics(state: &Arc<AppState>, output: &mut String) {
    let selection = state.selection.read().await;
    let selected = selection.len() as u64;
    let tasks = GroupedSummary::from_selection(selection.selected()).len() as u64;
    drop(selection);

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP crewmatch_selection_workers Number of workers currently selected"
    )
    .ok();
    writeln!(output, "# TYPE crewmatch_selection_workers gauge").ok();
    writeln!(output, "crewmatch_selection_workers {selected}").ok();

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP crewmatch_selection_tasks Number of distinct tasks in the selection"
    )
    .ok();
    writeln!(output, "# TYPE crewmatch_selection_tasks gauge").ok();
    writeln!(output, "crewmatch_selection_tasks {tasks}").ok();
}

/// Collect commit metrics.
fn collect_commit_metrics(state: &Arc<AppState>, output: &mut String) {
    let succeeded = state.commits_succeeded.load(Ordering::Relaxed);
    let failed = state.commits_failed.load(Ordering::Relaxed);

    writeln!(output).ok();
    writeln!(
        output,
        "# HELP crewmatch_commits_total Total assignment commits by result"
    )
    .ok();
    writeln!(output, "# TYPE crewmatch_commits_total counter").ok();
    writeln!(
        output,
        "crewmatch_commits_total{{result=\"succeeded\"}} {succeeded}"
    )
    .ok();
    writeln!(
        output,
        "crewmatch_commits_total{{result=\"failed\"}} {failed}"
    )
    .ok();
}
