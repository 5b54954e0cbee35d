//! HTTP API.

pub mod error;
pub mod extract;
mod routes;
pub mod tasks;

pub use error::{ApiError, DetailBody, ErrorBody};
pub use routes::{router, serve, AppState, HealthResponse, MessageResponse};
