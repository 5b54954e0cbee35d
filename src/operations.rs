//! Task operations over the store.
//!
//! Every business rule lives here: existence checks, partial merges, and the
//! duplicate-id guard. Handlers only translate requests in and results out.

use crate::error::{TaskError, TaskResult};
use crate::store::TaskStore;
use crate::task::{Task, TaskCreate, TaskId, TaskUpdate};

/// Default page offset for listing.
pub const DEFAULT_SKIP: i64 = 0;
/// Default page size for listing.
pub const DEFAULT_LIMIT: i64 = 100;

/// Store a new task under `assigned_id`.
///
/// Fails with `DuplicateId` if the id is already taken, which only happens
/// when a caller reuses an id instead of taking a fresh one from the store.
pub async fn create(store: &TaskStore, input: TaskCreate, assigned_id: TaskId) -> TaskResult<Task> {
    store.insert(Task::new(assigned_id, input)).await
}

pub async fn read(store: &TaskStore, id: TaskId) -> TaskResult<Task> {
    store.get(id).await.ok_or(TaskError::NotFound(id))
}

/// List tasks in creation order. Ranges that make no sense produce an empty page.
pub async fn list(store: &TaskStore, skip: Option<i64>, limit: Option<i64>) -> Vec<Task> {
    store
        .list(skip.unwrap_or(DEFAULT_SKIP), limit.unwrap_or(DEFAULT_LIMIT))
        .await
}

pub async fn update(store: &TaskStore, id: TaskId, update: &TaskUpdate) -> TaskResult<Task> {
    store
        .merge_update(id, update)
        .await
        .ok_or(TaskError::NotFound(id))
}

pub async fn delete(store: &TaskStore, id: TaskId) -> TaskResult<Task> {
    store.remove(id).await.ok_or(TaskError::NotFound(id))
}
