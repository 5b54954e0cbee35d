//! Extractors that turn every malformed input into a 422 `ApiError`.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use std::num::IntErrorKind;

use super::error::ApiError;
use crate::task::{TaskId, Validate, ValidationError};

/// JSON body that is deserialized and then validated before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Task id taken from the `:id` path segment.
///
/// Any integer is accepted: one outside the `TaskId` range cannot name a
/// stored task and resolves to "not found" rather than malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskIdPath(pub TaskId);

#[async_trait]
impl<S> FromRequestParts<S> for TaskIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_task_id(&raw).map(Self)
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    match raw.parse::<TaskId>() {
        Ok(id) => Ok(id),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ApiError::UnknownId(normalize_integer(raw)))
        }
        Err(e) => Err(ValidationError::single(
            "path",
            format!("Input should be a valid integer: {}", e),
        )
        .into()),
    }
}

/// Canonical decimal form: no `+` sign, no leading zeros.
fn normalize_integer(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.strip_prefix('+').unwrap_or(raw)),
    };
    format!("{}{}", sign, digits.trim_start_matches('0'))
}

/// Query parameters with the rejection mapped to `ApiError`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
