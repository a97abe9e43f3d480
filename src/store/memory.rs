//! In-memory remote store
//!
//! Stands in for the backend in tests and development. Tasks keep
//! insertion order, ids are assigned on insert the way the server
//! would, and failures can be injected so error paths are exercisable.
//! Every call that would have gone over the wire is counted, which
//! lets tests assert that an operation issued no request at all.

use crate::session::User;
use crate::store::{Ack, ProfileDraft, RemoteStore};
use crate::task::{Task, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

const DEFAULT_LATEST_COUNT: usize = 5;

/// In-memory remote store implementation
pub struct MemoryStore {
    tasks: Arc<RwLock<Vec<Task>>>,
    user: Arc<RwLock<User>>,
    latest_count: usize,
    failing: Arc<RwLock<bool>>,
    profile_rejection: Arc<RwLock<Option<String>>>,
    request_count: Arc<RwLock<u64>>,
}

impl MemoryStore {
    /// Create a new in-memory store with a placeholder user
    pub fn new() -> Self {
        Self::with_user(User {
            id: Uuid::new_v4().to_string(),
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            role: "user".to_string(),
        })
    }

    /// Create a new in-memory store holding the given user
    pub fn with_user(user: User) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
            user: Arc::new(RwLock::new(user)),
            latest_count: DEFAULT_LATEST_COUNT,
            failing: Arc::new(RwLock::new(false)),
            profile_rejection: Arc::new(RwLock::new(None)),
            request_count: Arc::new(RwLock::new(0)),
        }
    }

    /// Set how many tasks the latest-tasks subset returns (chainable)
    pub fn with_latest_count(mut self, count: usize) -> Self {
        self.latest_count = count;
        self
    }

    /// Insert a task, assigning a fresh id like the backend would
    pub async fn insert(&self, title: &str, desc: &str, status: TaskStatus) -> Task {
        let task = Task::new(Uuid::new_v4().to_string(), title, desc).with_status(status);
        self.tasks.write().await.push(task.clone());
        task
    }

    /// Make every subsequent request fail with a transport error
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }

    /// Make profile updates fail with the given server message
    pub async fn reject_profile(&self, message: &str) {
        *self.profile_rejection.write().await = Some(message.to_string());
    }

    /// Number of requests received so far, failed ones included
    pub async fn request_count(&self) -> u64 {
        *self.request_count.read().await
    }

    /// Count the request and fail it if failure injection is on
    async fn record_request(&self) -> crate::Result<()> {
        *self.request_count.write().await += 1;
        if *self.failing.read().await {
            return Err(crate::TaskViewError::Transport(
                "injected transport failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn list_tasks(&self) -> crate::Result<Vec<Task>> {
        self.record_request().await?;
        Ok(self.tasks.read().await.clone())
    }

    async fn latest_tasks(&self) -> crate::Result<Vec<Task>> {
        self.record_request().await?;
        let tasks = self.tasks.read().await;
        let skip = tasks.len().saturating_sub(self.latest_count);
        Ok(tasks[skip..].to_vec())
    }

    async fn update_status(&self, task_id: &str, status: TaskStatus) -> crate::Result<Ack> {
        self.record_request().await?;
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| crate::TaskViewError::TaskNotFound(task_id.to_string()))?;
        task.status = status;
        debug!("Task {} set to {}", task_id, status);
        Ok(Ack {
            message: "Task updated successfully".to_string(),
        })
    }

    async fn delete_task(&self, task_id: &str) -> crate::Result<Ack> {
        self.record_request().await?;
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|task| task.id != task_id);
        if tasks.len() == before {
            return Err(crate::TaskViewError::TaskNotFound(task_id.to_string()));
        }
        Ok(Ack {
            message: "Task deleted successfully".to_string(),
        })
    }

    async fn update_profile(&self, user_id: &str, draft: &ProfileDraft) -> crate::Result<User> {
        self.record_request().await?;

        if let Some(message) = self.profile_rejection.read().await.as_ref() {
            return Err(crate::TaskViewError::Validation(message.clone()));
        }
        if draft.name.is_empty() || draft.email.is_empty() {
            return Err(crate::TaskViewError::Validation(
                "Name and email are required".to_string(),
            ));
        }

        let mut user = self.user.write().await;
        if user.id != user_id {
            return Err(crate::TaskViewError::Validation(
                "User not found".to_string(),
            ));
        }
        user.name = draft.name.clone();
        user.email = draft.email.clone();
        Ok(user.clone())
    }
}
