//! HTTP server for the assignment service.
//!
//! Provides endpoints for:
//! - Task catalog and prefix search (`/v1/tasks`, `/v1/tasks/search`)
//! - Worker recommendations (`/v1/tasks/:task_id/recommendations`)
//! - Selection management (`/v1/selection`, `/v1/selection/summary`)
//! - Assignment commit (`/v1/assignments`)
//! - Health check (`/health`)
//! - Prometheus metrics (`/metrics`)

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

mod handlers;
pub mod responses;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer for app and devtools access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Catalog routes
        .route("/v1/tasks", get(handlers::list_tasks))
        .route("/v1/tasks/search", get(handlers::search_tasks))
        .route(
            "/v1/tasks/:task_id/recommendations",
            get(handlers::recommend_workers),
        )
        // Selection routes
        .route(
            "/v1/selection",
            get(handlers::get_selection)
                .post(handlers::toggle_selection)
                .delete(handlers::clear_selection),
        )
        .route("/v1/selection/summary", get(handlers::get_summary))
        .route("/v1/selection/:worker_id", delete(handlers::remove_selection))
        // Assignment routes
        .route("/v1/assignments", post(handlers::commit_assignment))
        // Observability routes
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(cors)
        .with_state(state)
}
