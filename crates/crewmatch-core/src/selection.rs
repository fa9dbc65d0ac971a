//! The accumulating worker selection an operator builds before committing.

use crate::{TaskType, WorkerId, WorkerRecord};
use serde::{Deserialize, Serialize};

/// A worker chosen for a task, tagged at selection time.
///
/// The task tag is fixed when the worker is toggled on; browsing a different
/// task later does not re-tag existing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedWorker {
    /// The worker as it appeared in the directory at selection time.
    #[serde(flatten)]
    pub record: WorkerRecord,

    /// Name of the task type the worker was selected for.
    pub task: String,
}

impl SelectedWorker {
    /// Tag a worker record with the task it was selected for.
    pub fn new(record: WorkerRecord, task: impl Into<String>) -> Self {
        Self {
            record,
            task: task.into(),
        }
    }

    /// The selected worker's id.
    pub fn worker_id(&self) -> &WorkerId {
        &self.record.id
    }
}

/// Ordered, deduplicated accumulation of selected workers across tasks.
///
/// A worker id appears at most once in the store regardless of how many
/// tasks it was toggled under: the first add wins and later toggles are
/// no-ops until the worker is removed. Mutations are total; the boolean
/// returns report whether the store changed, nothing more.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionStore {
    entries: Vec<SelectedWorker>,
}

impl SelectionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a worker into the selection for a task.
    ///
    /// Appends the worker tagged with `for_task`'s name when it is not yet
    /// selected and returns true. Returns false without changing the store
    /// when the worker is already selected, under this task or any other.
    pub fn toggle(&mut self, worker: &WorkerRecord, for_task: &TaskType) -> bool {
        if self.contains(&worker.id) {
            return false;
        }
        self.entries
            .push(SelectedWorker::new(worker.clone(), for_task.name.as_str()));
        true
    }

    /// Remove a worker from the selection by id.
    ///
    /// Returns false (not an error) when the id is not selected.
    pub fn remove(&mut self, worker_id: &WorkerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.record.id != *worker_id);
        self.entries.len() < before
    }

    /// Empty the selection. Called after a successful commit.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of the selection in insertion order.
    pub fn selected(&self) -> &[SelectedWorker] {
        &self.entries
    }

    /// Whether a worker id is currently selected.
    pub fn contains(&self, worker_id: &WorkerId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.record.id == *worker_id)
    }

    /// Number of selected workers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harvesting() -> TaskType {
        TaskType::new("t1", "Harvesting")
    }

    fn pruning() -> TaskType {
        TaskType::new("t4", "Pruning")
    }

    fn ahmad() -> WorkerRecord {
        WorkerRecord::new("w1", "Ahmad", "Harvesting", 92)
    }

    fn maya() -> WorkerRecord {
        WorkerRecord::new("w6", "Maya", "Pruning", 88)
    }

    #[test]
    fn test_toggle_appends_tagged_worker() {
        let mut store = SelectionStore::new();
        assert!(store.toggle(&ahmad(), &harvesting()));

        let selected = store.selected();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].record.name, "Ahmad");
        assert_eq!(selected[0].task, "Harvesting");
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut store = SelectionStore::new();
        assert!(store.toggle(&ahmad(), &harvesting()));
        assert!(!store.toggle(&ahmad(), &harvesting()));

        let mut once = SelectionStore::new();
        once.toggle(&ahmad(), &harvesting());
        assert_eq!(store, once);
    }

    #[test]
    fn test_toggle_under_different_task_keeps_first_tag() {
        let mut store = SelectionStore::new();
        store.toggle(&ahmad(), &harvesting());
        assert!(!store.toggle(&ahmad(), &pruning()));

        assert_eq!(store.len(), 1);
        assert_eq!(store.selected()[0].task, "Harvesting");
    }

    #[test]
    fn test_toggle_after_remove_can_retag() {
        let mut store = SelectionStore::new();
        store.toggle(&ahmad(), &harvesting());
        store.remove(&WorkerId::new("w1"));
        assert!(store.toggle(&ahmad(), &pruning()));
        assert_eq!(store.selected()[0].task, "Pruning");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = SelectionStore::new();
        store.toggle(&ahmad(), &harvesting());
        assert!(!store.remove(&WorkerId::new("w99")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_selection_preserves_insertion_order() {
        let mut store = SelectionStore::new();
        store.toggle(&ahmad(), &harvesting());
        store.toggle(&maya(), &pruning());

        let names: Vec<&str> = store
            .selected()
            .iter()
            .map(|entry| entry.record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ahmad", "Maya"]);
    }

    #[test]
    fn test_remove_leaves_remaining_selection_intact() {
        // Toggle Ahmad for Harvesting, Maya for Pruning, remove Ahmad:
        // only Maya(Pruning) remains.
        let mut store = SelectionStore::new();
        store.toggle(&ahmad(), &harvesting());
        store.toggle(&maya(), &pruning());
        assert!(store.remove(&WorkerId::new("w1")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.selected()[0].record.name, "Maya");
        assert_eq!(store.selected()[0].task, "Pruning");
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = SelectionStore::new();
        store.toggle(&ahmad(), &harvesting());
        store.toggle(&maya(), &pruning());
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains(&WorkerId::new("w1")));
    }

    #[test]
    fn test_selected_worker_serializes_flat() {
        let entry = SelectedWorker::new(ahmad(), "Harvesting");
        let json = serde_json::to_value(&entry).unwrap();
        // Record fields sit alongside the task tag, not nested under it.
        assert_eq!(json["id"], "w1");
        assert_eq!(json["name"], "Ahmad");
        assert_eq!(json["task"], "Harvesting");
    }
}
