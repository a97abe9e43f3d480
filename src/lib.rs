//! Task View RS - client-side view state for a task tracking application
//!
//! This library implements the view state held by a task tracker's client:
//! task tables with inline status editing and deletion, dashboard counters,
//! and a profile update form. The data of record lives in a remote REST
//! backend; local state is a best-effort mirror that is replaced wholesale
//! on load and patched in place only after the backend confirms a mutation.

/// Configuration management for the client
pub mod config;
/// Confirmation prompts and user notifications
pub mod notify;
/// Authenticated session context
pub mod session;
/// Remote store trait and implementations
pub mod store;
/// Task data model
pub mod task;
/// View state reconcilers
pub mod view;

pub use config::Config;
pub use session::{Session, User};
pub use store::http::HttpStore;
pub use store::memory::MemoryStore;
pub use store::{Ack, ProfileDraft, RemoteStore};
pub use task::{Task, TaskStatus};
pub use view::profile::{ProfileForm, SubmitOutcome};
pub use view::{TaskQuery, TaskView};

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, TaskViewError>;

/// Error types for the client
#[derive(Error, Debug)]
pub enum TaskViewError {
    /// Network unreachable or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server rejected the submitted data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store response did not match the expected shape
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Task with the specified ID was not found
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
