//! Domain failures shared by the store, the operation layer, and the handlers.

use thiserror::Error;

use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task with id {0} not found")]
    NotFound(TaskId),

    #[error("Task with id {0} already exists.")]
    DuplicateId(TaskId),
}

pub type TaskResult<T> = Result<T, TaskError>;
