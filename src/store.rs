//! In-memory task store.
//!
//! Holds every task in creation order plus the process-wide id counter. Each
//! public method takes the lock once, so an id issue or a single record
//! mutation is indivisible with respect to concurrent requests.

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::task::{Task, TaskId, TaskUpdate};

/// First id handed out by a fresh (or reset) store.
pub const FIRST_TASK_ID: TaskId = 1;

#[derive(Debug)]
struct StoreInner {
    tasks: IndexMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            tasks: IndexMap::new(),
            next_id: FIRST_TASK_ID,
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next identifier.
    ///
    /// The counter only moves forward; deleting a task never frees its id.
    pub async fn issue_id(&self) -> TaskId {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    pub async fn get(&self, id: TaskId) -> Option<Task> {
        let inner = self.inner.read().await;
        inner.tasks.get(&id).cloned()
    }

    /// Tasks in creation order, sliced to `[skip, skip + limit)`.
    ///
    /// A negative `skip` or a non-positive `limit` yields an empty page.
    pub async fn list(&self, skip: i64, limit: i64) -> Vec<Task> {
        if skip < 0 || limit <= 0 {
            return Vec::new();
        }
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        let inner = self.inner.read().await;
        inner
            .tasks
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Add a task, refusing to overwrite an existing record with the same id.
    pub async fn insert(&self, task: Task) -> TaskResult<Task> {
        let mut inner = self.inner.write().await;
        if inner.tasks.contains_key(&task.id) {
            return Err(TaskError::DuplicateId(task.id));
        }
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Merge the present fields of `update` onto the stored task.
    ///
    /// The task keeps its position in the listing order.
    pub async fn merge_update(&self, id: TaskId, update: &TaskUpdate) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.get_mut(&id)?;
        if !task.merge(update) {
            tracing::debug!(id, "Update carried no fields, task unchanged");
        }
        Some(task.clone())
    }

    pub async fn remove(&self, id: TaskId) -> Option<Task> {
        let mut inner = self.inner.write().await;
        inner.tasks.shift_remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.tasks.is_empty()
    }

    /// Drop every task and restart the id counter.
    ///
    /// Test-harness use only; no route exposes it.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        *inner = StoreInner::default();
        tracing::debug!("Task store reset");
    }
}

/// Shared task store wrapped in Arc for concurrent access.
pub type SharedTaskStore = Arc<TaskStore>;
