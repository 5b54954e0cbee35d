//! Task API endpoints.
//!
//! Provides endpoints for managing tasks:
//! - List tasks
//! - Create task
//! - Get task details
//! - Update task
//! - Delete task

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::error::ApiError;
use super::extract::{ApiQuery, TaskIdPath, ValidJson};
use super::routes::AppState;
use crate::operations;
use crate::task::{Task, TaskCreate, TaskUpdate};

/// Create task routes.
///
/// The collection answers with and without a trailing slash.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
}

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// POST /tasks/ - Create a new task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<TaskCreate>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let id = state.tasks.issue_id().await;
    let task = operations::create(&state.tasks, input, id).await?;

    tracing::info!(id = task.id, title = %task.title, "Created task");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/ - List tasks in creation order.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListTasksQuery>,
) -> Json<Vec<Task>> {
    let limit = query.limit.unwrap_or(state.config.default_list_limit);
    let tasks = operations::list(&state.tasks, query.skip, Some(limit)).await;

    tracing::debug!(skip = ?query.skip, limit, count = tasks.len(), "Listed tasks");

    Json(tasks)
}

/// GET /tasks/:id - Get task details.
async fn get_task(
    State(state): State<Arc<AppState>>,
    TaskIdPath(id): TaskIdPath,
) -> Result<Json<Task>, ApiError> {
    let task = operations::read(&state.tasks, id).await?;
    tracing::debug!(id, "Read task");
    Ok(Json(task))
}

/// PUT /tasks/:id - Merge the supplied fields onto a task.
async fn update_task(
    State(state): State<Arc<AppState>>,
    TaskIdPath(id): TaskIdPath,
    ValidJson(update): ValidJson<TaskUpdate>,
) -> Result<Json<Task>, ApiError> {
    let updated = operations::update(&state.tasks, id, &update).await?;

    tracing::info!(id, title = %updated.title, "Updated task");

    Ok(Json(updated))
}

/// DELETE /tasks/:id - Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    TaskIdPath(id): TaskIdPath,
) -> Result<StatusCode, ApiError> {
    let removed = operations::delete(&state.tasks, id).await?;

    tracing::info!(id, title = %removed.title, "Deleted task");

    Ok(StatusCode::NO_CONTENT)
}
