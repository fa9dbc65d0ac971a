//! Selection management handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crewmatch_core::{GroupedSummary, SelectedWorker, TaskId, WorkerId};

use crate::http::responses::{
    ClearResponse, ErrorResponse, RemoveResponse, SelectionEntryResponse, SummaryResponse,
    TaskGroupResponse, ToggleRequest, ToggleResponse,
};
use crate::state::AppState;

fn selection_body(entries: &[SelectedWorker]) -> Vec<SelectionEntryResponse> {
    entries.iter().map(SelectionEntryResponse::from).collect()
}

/// List the current selection in insertion order.
pub async fn get_selection(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let selection = state.selection.read().await;
    Json(selection_body(selection.selected()))
}

/// Add a worker to the selection for a task.
///
/// Both ids are resolved against the catalog and directory before the store
/// is touched, so the selection can never reference an unknown worker. A
/// worker already selected is left untouched and reported with `added: false`.
pub async fn toggle_selection(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequest>,
) -> impl IntoResponse {
    let worker = match state.directory.get(&WorkerId::new(req.worker_id.as_str())) {
        Some(worker) => worker.clone(),
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Worker not found: {}", req.worker_id),
                }),
            )
                .into_response();
        }
    };

    let task = match state.catalog.get(&TaskId::new(req.task_id.as_str())) {
        Some(task) => task.clone(),
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Task not found: {}", req.task_id),
                }),
            )
                .into_response();
        }
    };

    let mut selection = state.selection.write().await;
    let added = selection.toggle(&worker, &task);
    if added {
        info!(worker_id = %worker.id, task = %task.name, "Worker selected");
    }

    (
        StatusCode::OK,
        Json(ToggleResponse {
            added,
            selection: selection_body(selection.selected()),
        }),
    )
        .into_response()
}

/// Remove a worker from the selection.
///
/// An id that is not selected is a no-op, reported with `removed: false`.
pub async fn remove_selection(
    State(state): State<Arc<AppState>>,
    Path(worker_id): Path<String>,
) -> impl IntoResponse {
    let mut selection = state.selection.write().await;
    let removed = selection.remove(&WorkerId::new(worker_id.as_str()));
    if removed {
        info!(worker_id = %worker_id, "Worker unselected");
    }

    Json(RemoveResponse {
        removed,
        selection: selection_body(selection.selected()),
    })
}

/// Empty the selection.
pub async fn clear_selection(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut selection = state.selection.write().await;
    let cleared = selection.len();
    selection.clear();
    info!(cleared, "Selection cleared");

    Json(ClearResponse { cleared })
}

/// The selection grouped by task, in first-selected order.
pub async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let selection = state.selection.read().await;
    let summary = GroupedSummary::from_selection(selection.selected());

    Json(SummaryResponse {
        groups: summary
            .groups()
            .iter()
            .map(|group| TaskGroupResponse {
                task: group.task.clone(),
                workers: selection_body(&group.workers),
            })
            .collect(),
        total_workers: summary.total_workers(),
    })
}
