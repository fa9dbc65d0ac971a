//! HTTP request and response types.

use serde::{Deserialize, Serialize};

use crewmatch_core::{SelectedWorker, TaskType, WorkerRecord};

// ============================================================================
// Task types
// ============================================================================

/// Query parameters for the task search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Prefix to match task names against.
    pub q: Option<String>,
}

/// Response for a single task type.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub name: String,
}

impl From<&TaskType> for TaskResponse {
    fn from(task: &TaskType) -> Self {
        Self {
            id: task.id.to_string(),
            name: task.name.clone(),
        }
    }
}

// ============================================================================
// Recommendation types
// ============================================================================

/// Response for a recommended worker.
#[derive(Debug, Serialize)]
pub struct WorkerResponse {
    pub id: String,
    pub name: String,
    pub skill: String,
    pub suitability_score: u8,
    pub availability: String,
    pub experience_years: u32,
    pub current_tasks: Vec<String>,
    /// Whether the worker is already in the selection.
    pub selected: bool,
}

impl WorkerResponse {
    pub fn new(record: &WorkerRecord, selected: bool) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            skill: record.skill.clone(),
            suitability_score: record.suitability_score,
            availability: record.availability.as_wire_str().to_string(),
            experience_years: record.experience_years,
            current_tasks: record.current_tasks.clone(),
            selected,
        }
    }
}

// ============================================================================
// Selection types
// ============================================================================

/// Request body for the selection toggle endpoint.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub worker_id: String,
    pub task_id: String,
}

/// Response for a single selection entry.
#[derive(Debug, Serialize)]
pub struct SelectionEntryResponse {
    pub id: String,
    pub name: String,
    pub skill: String,
    pub suitability_score: u8,
    pub availability: String,
    pub experience_years: u32,
    pub current_tasks: Vec<String>,
    /// Task the worker was selected for.
    pub task: String,
}

impl From<&SelectedWorker> for SelectionEntryResponse {
    fn from(entry: &SelectedWorker) -> Self {
        Self {
            id: entry.record.id.to_string(),
            name: entry.record.name.clone(),
            skill: entry.record.skill.clone(),
            suitability_score: entry.record.suitability_score,
            availability: entry.record.availability.as_wire_str().to_string(),
            experience_years: entry.record.experience_years,
            current_tasks: entry.record.current_tasks.clone(),
            task: entry.task.clone(),
        }
    }
}

/// Response body for the selection toggle endpoint.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// Whether the worker was added (false when already selected).
    pub added: bool,
    pub selection: Vec<SelectionEntryResponse>,
}

/// Response body for the selection remove endpoint.
#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    /// Whether an entry was removed (false when the id was not selected).
    pub removed: bool,
    pub selection: Vec<SelectionEntryResponse>,
}

/// Response body for the selection clear endpoint.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    /// Number of entries the store held before clearing.
    pub cleared: usize,
}

// ============================================================================
// Summary types
// ============================================================================

/// One task group in the summary.
#[derive(Debug, Serialize)]
pub struct TaskGroupResponse {
    pub task: String,
    pub workers: Vec<SelectionEntryResponse>,
}

/// Response body for the grouped summary endpoint.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub groups: Vec<TaskGroupResponse>,
    pub total_workers: usize,
}

// ============================================================================
// Assignment types
// ============================================================================

/// Response body for a committed assignment.
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    /// Confirmation message from the assignment sink.
    pub message: String,

    /// Number of workers assigned.
    pub assigned_workers: usize,

    /// Number of distinct tasks assigned to.
    pub task_count: usize,

    /// Commit time (ISO 8601).
    pub committed_at: String,
}

// ============================================================================
// Error types
// ============================================================================

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
