//! Task catalog and recommendation handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crewmatch_core::TaskId;

use crate::http::responses::{ErrorResponse, SearchParams, TaskResponse, WorkerResponse};
use crate::state::AppState;

/// List the full task catalog.
pub async fn list_tasks(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response: Vec<TaskResponse> = state.catalog.iter().map(TaskResponse::from).collect();
    Json(response)
}

/// Prefix search over task names.
///
/// A blank or missing query matches nothing; an unmatched query returns an
/// empty list, never an error.
pub async fn search_tasks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    let matches = state.catalog.search(&query);
    debug!(query = %query, matches = matches.len(), "Task search");

    let response: Vec<TaskResponse> = matches.into_iter().map(TaskResponse::from).collect();
    Json(response)
}

/// Rank workers for a task, best match first.
///
/// Each entry carries a `selected` flag so clients can highlight workers
/// already in the selection. Availability is reported but never filtered on.
pub async fn recommend_workers(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> impl IntoResponse {
    let task = match state.catalog.get(&TaskId::new(task_id.as_str())) {
        Some(task) => task,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Task not found: {task_id}"),
                }),
            )
                .into_response();
        }
    };

    let selection = state.selection.read().await;
    let response: Vec<WorkerResponse> = state
        .directory
        .recommend(task)
        .into_iter()
        .map(|record| WorkerResponse::new(record, selection.contains(&record.id)))
        .collect();

    (StatusCode::OK, Json(response)).into_response()
}
