//! Worker directory types and skill-ranked recommendation.

use crate::{TaskType, WorkerId};
use serde::{Deserialize, Serialize};

/// Whether a worker is currently free to take on new work.
///
/// Advisory only: recommendations never filter on availability, so a
/// busy-but-capable worker still surfaces for the operator's judgment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    /// Worker is free for new assignments.
    #[default]
    Available,
    /// Worker is occupied with current tasks.
    Busy,
}

impl Availability {
    /// The wire-format name of the variant, as serde serializes it.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Availability::Available => "AVAILABLE",
            Availability::Busy => "BUSY",
        }
    }
}

/// A worker with a skill, a fitness score, and availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Unique worker identifier.
    pub id: WorkerId,

    /// Worker display name.
    pub name: String,

    /// The task name this worker is skilled in. Shares a controlled
    /// vocabulary with TaskType names.
    pub skill: String,

    /// Fitness score 0-100. Externally computed; consumed as opaque input.
    pub suitability_score: u8,

    /// Current availability. Informational, never a filter.
    pub availability: Availability,

    /// Years of experience.
    pub experience_years: u32,

    /// Labels of the work the worker is currently occupied with.
    pub current_tasks: Vec<String>,
}

impl WorkerRecord {
    /// Create a new WorkerRecord, available and with no current tasks.
    pub fn new(
        id: impl Into<WorkerId>,
        name: impl Into<String>,
        skill: impl Into<String>,
        suitability_score: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skill: skill.into(),
            suitability_score,
            availability: Availability::Available,
            experience_years: 0,
            current_tasks: Vec::new(),
        }
    }

    /// Builder method to set availability.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Builder method to set years of experience.
    pub fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    /// Builder method to add a current task label.
    pub fn with_current_task(mut self, label: impl Into<String>) -> Self {
        self.current_tasks.push(label.into());
        self
    }
}

/// The fixed, ordered set of workers for a session.
///
/// Loaded once at startup. Directory order is the tie-break order for
/// recommendations with equal scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerDirectory {
    workers: Vec<WorkerRecord>,
}

impl WorkerDirectory {
    /// Create a directory from an ordered list of workers.
    pub fn new(workers: Vec<WorkerRecord>) -> Self {
        Self { workers }
    }

    /// Number of workers in the directory.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Iterate over workers in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkerRecord> {
        self.workers.iter()
    }

    /// Look up a worker by id.
    pub fn get(&self, id: &WorkerId) -> Option<&WorkerRecord> {
        self.workers.iter().find(|worker| &worker.id == id)
    }

    /// Rank the directory's workers for a task.
    ///
    /// Every worker whose skill equals the task name exactly is returned,
    /// ordered by descending suitability score. The sort is stable, so
    /// workers with equal scores keep their directory order. No matching
    /// worker yields an empty list, never an error. Availability is not
    /// consulted.
    pub fn recommend(&self, task: &TaskType) -> Vec<&WorkerRecord> {
        let mut ranked: Vec<&WorkerRecord> = self
            .workers
            .iter()
            .filter(|worker| worker.skill == task.name)
            .collect();
        ranked.sort_by(|a, b| b.suitability_score.cmp(&a.suitability_score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harvesting() -> TaskType {
        TaskType::new("t1", "Harvesting")
    }

    fn directory() -> WorkerDirectory {
        WorkerDirectory::new(vec![
            WorkerRecord::new("w1", "Ahmad", "Harvesting", 92).with_experience_years(5),
            WorkerRecord::new("w2", "Faiz", "Harvesting", 84).with_experience_years(3),
            WorkerRecord::new("w3", "Aiman", "Planting", 80)
                .with_availability(Availability::Busy),
            WorkerRecord::new("w4", "Siti", "Harvesting", 75),
            WorkerRecord::new("w5", "Hafiz", "Harvesting", 78)
                .with_availability(Availability::Busy),
        ])
    }

    #[test]
    fn test_recommend_filters_by_exact_skill() {
        let directory = directory();
        let ranked = directory.recommend(&harvesting());
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|worker| worker.skill == "Harvesting"));
    }

    #[test]
    fn test_recommend_orders_by_descending_score() {
        let directory = directory();
        let scores: Vec<u8> = directory
            .recommend(&harvesting())
            .iter()
            .map(|worker| worker.suitability_score)
            .collect();
        assert_eq!(scores, vec![92, 84, 78, 75]);
    }

    #[test]
    fn test_recommend_ties_keep_directory_order() {
        let directory = WorkerDirectory::new(vec![
            WorkerRecord::new("w1", "Ahmad", "Harvesting", 84),
            WorkerRecord::new("w2", "Faiz", "Harvesting", 92),
            WorkerRecord::new("w3", "Siti", "Harvesting", 84),
            WorkerRecord::new("w4", "Hafiz", "Harvesting", 84),
        ]);
        let ids: Vec<&str> = directory
            .recommend(&harvesting())
            .iter()
            .map(|worker| worker.id.as_str())
            .collect();
        // 92 first, then the three 84s in directory order.
        assert_eq!(ids, vec!["w2", "w1", "w3", "w4"]);
    }

    #[test]
    fn test_recommend_skill_match_is_case_sensitive() {
        let directory = WorkerDirectory::new(vec![WorkerRecord::new(
            "w1",
            "Ahmad",
            "harvesting",
            92,
        )]);
        assert!(directory.recommend(&harvesting()).is_empty());
    }

    #[test]
    fn test_recommend_no_match_is_empty_not_error() {
        let directory = directory();
        let pruning = TaskType::new("t4", "Pruning");
        assert!(directory.recommend(&pruning).is_empty());
    }

    #[test]
    fn test_recommend_does_not_filter_busy_workers() {
        let directory = directory();
        let ranked = directory.recommend(&harvesting());
        assert!(ranked
            .iter()
            .any(|worker| worker.availability == Availability::Busy));
    }

    #[test]
    fn test_availability_serde_casing() {
        let json = serde_json::to_string(&Availability::Busy).unwrap();
        assert_eq!(json, "\"BUSY\"");
        let parsed: Availability = serde_json::from_str("\"AVAILABLE\"").unwrap();
        assert_eq!(parsed, Availability::Available);
    }

    #[test]
    fn test_wire_str_matches_serde_representation() {
        for availability in [Availability::Available, Availability::Busy] {
            let json = serde_json::to_value(availability).unwrap();
            assert_eq!(json.as_str().unwrap(), availability.as_wire_str());
        }
    }

    #[test]
    fn test_get_by_id() {
        let directory = directory();
        assert_eq!(directory.get(&WorkerId::new("w4")).unwrap().name, "Siti");
        assert!(directory.get(&WorkerId::new("w99")).is_none());
    }
}
