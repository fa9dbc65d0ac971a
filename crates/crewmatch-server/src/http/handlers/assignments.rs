//! Assignment commit handler.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crewmatch_core::AssignmentError;

use crate::committer::Committer;
use crate::http::responses::{AssignmentResponse, ErrorResponse};
use crate::state::AppState;

/// Commit the current selection as an assignment.
///
/// The selection is handed to the configured sink exactly once and cleared
/// only when the sink confirms. An empty selection is rejected before the
/// sink is reached; a commit arriving while another is unresolved is
/// rejected rather than queued.
pub async fn commit_assignment(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match Committer::new(state).commit().await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AssignmentResponse {
                message: outcome.message,
                assigned_workers: outcome.assigned_workers,
                task_count: outcome.task_count,
                committed_at: outcome.committed_at.to_rfc3339(),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = match &e {
                AssignmentError::EmptySelection => StatusCode::BAD_REQUEST,
                AssignmentError::CommitInFlight => StatusCode::CONFLICT,
                AssignmentError::CommitFailed(_) => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use axum::body::to_bytes;

    use crewmatch_core::{SelectedWorker, TaskId, WorkerId};

    use crate::committer::{CommitSink, SinkError};
    use crate::dataset::Dataset;

    struct FailingSink;

    #[async_trait]
    impl CommitSink for FailingSink {
        async fn deliver(&self, _selection: &[SelectedWorker]) -> Result<String, SinkError> {
            Err(SinkError::new("assignment service returned HTTP 503"))
        }
    }

    fn demo_state() -> Arc<AppState> {
        let (catalog, directory) = Dataset::demo().into_parts().unwrap();
        AppState::new(catalog, directory)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn select_ahmad(state: &Arc<AppState>) {
        let worker = state.directory.get(&WorkerId::new("w1")).unwrap().clone();
        let task = state.catalog.get(&TaskId::new("t1")).unwrap().clone();
        state.selection.write().await.toggle(&worker, &task);
    }

    #[tokio::test]
    async fn test_commit_empty_selection_is_bad_request() {
        let state = demo_state();

        let response = commit_assignment(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "no workers selected");
    }

    #[tokio::test]
    async fn test_commit_success_returns_receipt() {
        let state = demo_state();
        select_ahmad(&state).await;

        let response = commit_assignment(State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["assigned_workers"], 1);
        assert_eq!(body["task_count"], 1);
        assert_eq!(state.selection_size().await, 0);
    }

    #[tokio::test]
    async fn test_failed_commit_is_bad_gateway_with_message() {
        let (catalog, directory) = Dataset::demo().into_parts().unwrap();
        let state = AppState::with_sink(catalog, directory, Arc::new(FailingSink));
        select_ahmad(&state).await;

        let response = commit_assignment(State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("assignment service returned HTTP 503"));
        // Selection preserved for retry.
        assert_eq!(state.selection_size().await, 1);
    }
}
