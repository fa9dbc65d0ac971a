//! Grouped-by-task view of the selection.

use crate::selection::SelectedWorker;
use serde::Serialize;

/// The selected workers for one task, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskGroup {
    /// Task name the workers were selected for.
    pub task: String,

    /// Workers in the order they were selected.
    pub workers: Vec<SelectedWorker>,
}

/// A read-only, task-partitioned view of a selection.
///
/// Always derived, never stored: callers recompute it from the live
/// selection on every read so the view cannot go stale when the store
/// mutates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedSummary {
    groups: Vec<TaskGroup>,
}

impl GroupedSummary {
    /// Partition a selection by task.
    ///
    /// Groups appear in the order their task first appears in the selection;
    /// within a group, workers keep their selection order. Every selected
    /// worker lands in exactly one group.
    pub fn from_selection(selection: &[SelectedWorker]) -> Self {
        let mut groups: Vec<TaskGroup> = Vec::new();
        for entry in selection {
            match groups.iter_mut().find(|group| group.task == entry.task) {
                Some(group) => group.workers.push(entry.clone()),
                None => groups.push(TaskGroup {
                    task: entry.task.clone(),
                    workers: vec![entry.clone()],
                }),
            }
        }
        Self { groups }
    }

    /// The groups in first-seen task order.
    pub fn groups(&self) -> &[TaskGroup] {
        &self.groups
    }

    /// Number of distinct tasks in the summary.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the summary has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total workers across all groups.
    pub fn total_workers(&self) -> usize {
        self.groups.iter().map(|group| group.workers.len()).sum()
    }
}
