//! Task catalog and worker directory loading.
//!
//! The server works from a static dataset loaded at startup, either the
//! built-in demo dataset or a JSON file supplied through configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crewmatch_core::{Availability, TaskCatalog, TaskType, WorkerDirectory, WorkerRecord};

/// Dataset loading and validation errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON.
    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Dataset contains no tasks.
    #[error("Dataset has an empty task catalog")]
    EmptyCatalog,

    /// Two tasks share an id.
    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(String),

    /// Two workers share an id.
    #[error("Duplicate worker id: {0}")]
    DuplicateWorkerId(String),
}

/// A task catalog and worker directory, as loaded from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Assignable task types.
    pub tasks: Vec<TaskType>,

    /// Workers available for recommendation.
    pub workers: Vec<WorkerRecord>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The built-in demo dataset: an estate crew across nine field tasks.
    pub fn demo() -> Self {
        Self {
            tasks: vec![
                TaskType::new("t1", "Harvesting"),
                TaskType::new("t2", "Planting"),
                TaskType::new("t3", "Maintenance"),
                TaskType::new("t4", "Pruning"),
                TaskType::new("t5", "Manuring"),
                TaskType::new("t6", "Spraying"),
                TaskType::new("t7", "Weeding"),
                TaskType::new("t8", "Pest and Disease"),
                TaskType::new("t9", "Mechanisation Fleet"),
            ],
            workers: vec![
                WorkerRecord::new("w1", "Ahmad", "Harvesting", 92)
                    .with_experience_years(5)
                    .with_current_task("Harvesting section A"),
                WorkerRecord::new("w2", "Faiz", "Harvesting", 84)
                    .with_experience_years(3)
                    .with_current_task("Harvesting section B"),
                WorkerRecord::new("w3", "Aiman", "Planting", 80)
                    .with_availability(Availability::Busy)
                    .with_experience_years(4)
                    .with_current_task("Planting section C"),
                WorkerRecord::new("w4", "Siti", "Harvesting", 75)
                    .with_experience_years(2)
                    .with_current_task("Assisting Harvesting section B"),
                WorkerRecord::new("w5", "Hafiz", "Harvesting", 78)
                    .with_availability(Availability::Busy)
                    .with_experience_years(3)
                    .with_current_task("Harvesting section C"),
                WorkerRecord::new("w6", "Maya", "Pruning", 88)
                    .with_experience_years(4)
                    .with_current_task("Pruning section A"),
                WorkerRecord::new("w7", "Zul", "Manuring", 85)
                    .with_experience_years(3)
                    .with_current_task("Manuring section B"),
                WorkerRecord::new("w8", "Lina", "Spraying", 90)
                    .with_availability(Availability::Busy)
                    .with_experience_years(5)
                    .with_current_task("Spraying section C"),
                WorkerRecord::new("w9", "Imran", "Weeding", 82)
                    .with_experience_years(3)
                    .with_current_task("Weeding section D"),
                WorkerRecord::new("w10", "Fauzi", "Pest and Disease", 87)
                    .with_experience_years(6)
                    .with_current_task("Pest inspection section A"),
                WorkerRecord::new("w11", "Hana", "Mechanisation Fleet", 91)
                    .with_availability(Availability::Busy)
                    .with_experience_years(7)
                    .with_current_task("Tractor maintenance"),
            ],
        }
    }

    /// Validate the dataset and split it into catalog and directory.
    ///
    /// Ids must be unique within tasks and within workers. A worker whose
    /// skill matches no catalog task is kept but logged, since it can never
    /// appear in a recommendation.
    pub fn into_parts(self) -> Result<(TaskCatalog, WorkerDirectory), DatasetError> {
        if self.tasks.is_empty() {
            return Err(DatasetError::EmptyCatalog);
        }

        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(task.id.as_str()) {
                return Err(DatasetError::DuplicateTaskId(task.id.to_string()));
            }
        }

        let mut worker_ids = HashSet::new();
        for worker in &self.workers {
            if !worker_ids.insert(worker.id.as_str()) {
                return Err(DatasetError::DuplicateWorkerId(worker.id.to_string()));
            }
        }

        let task_names: HashSet<&str> = self.tasks.iter().map(|t| t.name.as_str()).collect();
        for worker in &self.workers {
            if !task_names.contains(worker.skill.as_str()) {
                warn!(
                    worker = %worker.id,
                    skill = %worker.skill,
                    "Worker skill matches no catalog task"
                );
            }
        }

        Ok((
            TaskCatalog::new(self.tasks),
            WorkerDirectory::new(self.workers),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_is_valid() {
        let (catalog, directory) = Dataset::demo().into_parts().unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(directory.len(), 11);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let dataset = Dataset {
            tasks: vec![],
            workers: vec![],
        };
        assert!(matches!(
            dataset.into_parts(),
            Err(DatasetError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_duplicate_task_id_rejected() {
        let dataset = Dataset {
            tasks: vec![
                TaskType::new("t1", "Harvesting"),
                TaskType::new("t1", "Planting"),
            ],
            workers: vec![],
        };
        match dataset.into_parts() {
            Err(DatasetError::DuplicateTaskId(id)) => assert_eq!(id, "t1"),
            other => panic!("expected DuplicateTaskId, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_worker_id_rejected() {
        let dataset = Dataset {
            tasks: vec![TaskType::new("t1", "Harvesting")],
            workers: vec![
                WorkerRecord::new("w1", "Ahmad", "Harvesting", 92),
                WorkerRecord::new("w1", "Faiz", "Harvesting", 84),
            ],
        };
        match dataset.into_parts() {
            Err(DatasetError::DuplicateWorkerId(id)) => assert_eq!(id, "w1"),
            other => panic!("expected DuplicateWorkerId, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_skill_is_kept() {
        let dataset = Dataset {
            tasks: vec![TaskType::new("t1", "Harvesting")],
            workers: vec![WorkerRecord::new("w1", "Ahmad", "Winnowing", 92)],
        };
        let (_, directory) = dataset.into_parts().unwrap();
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_dataset_parses_from_json() {
        let raw = r#"{
            "tasks": [{"id": "t1", "name": "Harvesting"}],
            "workers": [{
                "id": "w1",
                "name": "Ahmad",
                "skill": "Harvesting",
                "suitability_score": 92,
                "availability": "AVAILABLE",
                "experience_years": 5,
                "current_tasks": ["Harvesting section A"]
            }]
        }"#;
        let dataset: Dataset = serde_json::from_str(raw).unwrap();
        assert_eq!(dataset.tasks.len(), 1);
        assert_eq!(dataset.workers[0].name, "Ahmad");
        assert_eq!(dataset.workers[0].suitability_score, 92);
    }

    #[test]
    fn test_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!("crewmatch-dataset-{}.json", std::process::id()));
        let raw = serde_json::to_string(&Dataset::demo()).unwrap();
        std::fs::write(&path, raw).unwrap();

        let dataset = Dataset::from_file(&path).unwrap();
        assert_eq!(dataset.tasks.len(), 9);
        assert_eq!(dataset.workers.len(), 11);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = Dataset::from_file("/nonexistent/crewmatch.json");
        match result {
            Err(DatasetError::Io { path, .. }) => {
                assert_eq!(path, "/nonexistent/crewmatch.json")
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
