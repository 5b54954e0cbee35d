//! # Task Manager API
//!
//! A small task-tracking HTTP service over an in-memory store.
//!
//! ## Request Flow
//!
//! ```text
//!   request ──▶ api (extract + validate) ──▶ operations ──▶ store
//!                      ▲                           │
//!                      └──── ApiError / Task ◀─────┘
//! ```
//!
//! ## Modules
//! - `task`: Task record, create/update payloads, and field validation
//! - `store`: Insertion-ordered task table and the id counter
//! - `operations`: Create/read/list/update/delete rules over the store
//! - `api`: axum handlers, extractors, and error-to-response mapping
//! - `config`: Environment configuration

pub mod api;
pub mod config;
pub mod error;
pub mod operations;
pub mod store;
pub mod task;

pub use config::Config;
pub use error::TaskError;
pub use store::{SharedTaskStore, TaskStore};
