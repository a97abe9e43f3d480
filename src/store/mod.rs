//! Remote store trait and implementations

/// HTTP implementation backed by the REST API
pub mod http;
/// In-memory implementation for tests and development
pub mod memory;

use crate::session::User;
use crate::task::{Task, TaskStatus};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Confirmation payload returned by mutating task endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ack {
    /// Human-readable confirmation from the server
    pub message: String,
}

/// Profile fields submitted on update
///
/// An empty password means "keep the current password".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// New password, or empty for no change
    pub password: String,
}

/// Trait for the backend service of record
///
/// Implementations own transport concerns; callers only see typed
/// records or a typed error. Mutations return the server's
/// acknowledgment so views can surface it to the user.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch all tasks
    async fn list_tasks(&self) -> crate::Result<Vec<Task>>;

    /// Fetch the server-defined recent subset of tasks
    async fn latest_tasks(&self) -> crate::Result<Vec<Task>>;

    /// Change the status of a single task
    async fn update_status(&self, task_id: &str, status: TaskStatus) -> crate::Result<Ack>;

    /// Delete a task
    async fn delete_task(&self, task_id: &str) -> crate::Result<Ack>;

    /// Update a user's profile, returning the stored user
    async fn update_profile(&self, user_id: &str, draft: &ProfileDraft) -> crate::Result<User>;
}
