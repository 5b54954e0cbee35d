//! Task module - defines the task record, its input payloads, and their validation.
//!
//! Input payloads are validated at the HTTP boundary, before anything touches the store:
//! - `TaskCreate` carries a required title plus optional description and completion flag
//! - `TaskUpdate` carries any subset of those fields and is merged onto an existing task
//! - `Validate` reports every failing field at once

mod model;
mod validation;

pub use model::{Task, TaskCreate, TaskId, TaskUpdate};
pub use validation::{
    FieldError, Validate, ValidationError, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
