//! Boundary error type and its mapping to HTTP responses.

use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TaskError;
use crate::task::{FieldError, ValidationError};

/// JSON body returned for validation, lookup, and internal failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

/// JSON body returned for a conflicting create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailBody {
    pub detail: String,
}

/// Every way a handler can fail. Translated to a response exactly once, here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Task(#[from] TaskError),

    /// An integer id outside the `TaskId` range; no such task can exist.
    #[error("Task with id {0} not found")]
    UnknownId(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Task(TaskError::NotFound(_)) | ApiError::UnknownId(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Task(TaskError::DuplicateId(_)) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(e) => {
                let body = ErrorBody {
                    message: e.to_string(),
                    details: Some(e.errors),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Task(e @ TaskError::DuplicateId(_)) => {
                tracing::warn!(error = %e, "Rejected task with duplicate id");
                let body = DetailBody {
                    detail: e.to_string(),
                };
                (status, Json(body)).into_response()
            }
            ApiError::Task(e) => (status, Json(ErrorBody::message(e.to_string()))).into_response(),
            e @ ApiError::UnknownId(_) => {
                (status, Json(ErrorBody::message(e.to_string()))).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error while handling request: {:#}", e);
                (status, Json(ErrorBody::message("Internal server error"))).into_response()
            }
        }
    }
}

/// Turn a handler panic into the generic 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", reason)).into_response()
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::single("body", rejection.body_text()).into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::single("path", rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::single("query", rejection.body_text()).into()
    }
}
