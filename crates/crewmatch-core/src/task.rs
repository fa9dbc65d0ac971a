//! Task catalog types and prefix search.

use crate::TaskId;
use serde::{Deserialize, Serialize};

/// A type of task workers can be recommended against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskType {
    /// Unique task type identifier.
    pub id: TaskId,

    /// Human-readable task name (e.g. "Harvesting"). Worker skills reference
    /// these names as a controlled vocabulary.
    pub name: String,
}

impl TaskType {
    /// Create a new TaskType.
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The fixed, ordered set of task types for a session.
///
/// Loaded once at startup. Insertion order is preserved and is the order
/// search results come back in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskCatalog {
    tasks: Vec<TaskType>,
}

impl TaskCatalog {
    /// Create a catalog from an ordered list of task types.
    pub fn new(tasks: Vec<TaskType>) -> Self {
        Self { tasks }
    }

    /// Number of task types in the catalog.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over task types in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskType> {
        self.tasks.iter()
    }

    /// Look up a task type by id.
    pub fn get(&self, id: &TaskId) -> Option<&TaskType> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Prefix-search the catalog by task name.
    ///
    /// A query that trims to empty matches nothing. Otherwise every task
    /// whose name starts with the trimmed query, compared case-insensitively,
    /// is returned in catalog order. An unmatched query yields an empty list,
    /// never an error.
    pub fn search(&self, query: &str) -> Vec<&TaskType> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.name.to_lowercase().starts_with(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TaskCatalog {
        TaskCatalog::new(vec![
            TaskType::new("t1", "Harvesting"),
            TaskType::new("t2", "Harvest-Planning"),
            TaskType::new("t3", "Planting"),
            TaskType::new("t4", "Pruning"),
        ])
    }

    #[test]
    fn test_search_blank_query_matches_nothing() {
        let catalog = catalog();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("\t\n").is_empty());
    }

    #[test]
    fn test_search_prefix_is_case_insensitive() {
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .search("HARV")
            .iter()
            .map(|task| task.name.as_str())
            .collect();
        assert_eq!(names, vec!["Harvesting", "Harvest-Planning"]);
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = catalog();
        let results = catalog.search("harv");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, TaskId::new("t1"));
        assert_eq!(results[1].id, TaskId::new("t2"));
    }

    #[test]
    fn test_search_trims_query() {
        let catalog = catalog();
        let results = catalog.search("  plan  ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Planting");
    }

    #[test]
    fn test_search_matches_prefix_only() {
        let catalog = catalog();
        // "runing" is a substring of "Pruning" but not a prefix.
        assert!(catalog.search("runing").is_empty());
    }

    #[test]
    fn test_search_unmatched_is_empty_not_error() {
        let catalog = catalog();
        assert!(catalog.search("spraying").is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(&TaskId::new("t4")).unwrap().name, "Pruning");
        assert!(catalog.get(&TaskId::new("t99")).is_none());
    }
}
