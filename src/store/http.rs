//! HTTP remote store
//!
//! Endpoints consumed (relative to the configured origin):
//! - `GET /api/tasks` and `GET /api/latest-tasks` for reads
//! - `PUT /api/tasks/{id}` with `{"status": ...}` for status changes
//!   (the backend also accepts partial updates on this route; PUT is
//!   the documented contract here, not PATCH)
//! - `DELETE /api/tasks/{id}`
//! - `PUT /api/update-profile/{id}` with cookies included

use crate::config::Config;
use crate::session::User;
use crate::store::{Ack, ProfileDraft, RemoteStore};
use crate::task::{Task, TaskStatus};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct StatusBody {
    status: TaskStatus,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileResponse {
    user: User,
}

/// Remote store implementation talking to the REST backend
pub struct HttpStore {
    client: Client,
    origin: String,
}

impl HttpStore {
    /// Create a new HTTP store from configuration
    pub fn new(config: &Config) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            // The profile endpoint authenticates via session cookies
            .cookie_store(true)
            .build()
            .map_err(|e| {
                crate::TaskViewError::Transport(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            origin: config.api_origin.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    async fn fetch_tasks(&self, path: &str) -> crate::Result<Vec<Task>> {
        let res = self
            .client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(transport)?;
        let body = ok_body(res).await?;

        let tasks: Vec<Task> = serde_json::from_str(&body)?;
        debug!("Fetched {} tasks from {}", tasks.len(), path);
        Ok(tasks)
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list_tasks(&self) -> crate::Result<Vec<Task>> {
        self.fetch_tasks("/api/tasks").await
    }

    async fn latest_tasks(&self) -> crate::Result<Vec<Task>> {
        self.fetch_tasks("/api/latest-tasks").await
    }

    async fn update_status(&self, task_id: &str, status: TaskStatus) -> crate::Result<Ack> {
        let res = self
            .client
            .put(self.endpoint(&format!("/api/tasks/{}", task_id)))
            .json(&StatusBody { status })
            .send()
            .await
            .map_err(transport)?;
        let body = ok_body(res).await?;

        let ack: Ack = serde_json::from_str(&body)?;
        Ok(ack)
    }

    async fn delete_task(&self, task_id: &str) -> crate::Result<Ack> {
        let res = self
            .client
            .delete(self.endpoint(&format!("/api/tasks/{}", task_id)))
            .send()
            .await
            .map_err(transport)?;
        let body = ok_body(res).await?;

        let ack: Ack = serde_json::from_str(&body)?;
        Ok(ack)
    }

    async fn update_profile(&self, user_id: &str, draft: &ProfileDraft) -> crate::Result<User> {
        let res = self
            .client
            .put(self.endpoint(&format!("/api/update-profile/{}", user_id)))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        if status.is_success() {
            let response: ProfileResponse = serde_json::from_str(&body)?;
            Ok(response.user)
        } else {
            // The backend reports rejections as {"message": ...}
            let message = serde_json::from_str::<Ack>(&body)
                .map(|ack| ack.message)
                .unwrap_or_else(|_| format!("Update failed with status {}", status));
            Err(crate::TaskViewError::Validation(message))
        }
    }
}

fn transport(err: reqwest::Error) -> crate::TaskViewError {
    crate::TaskViewError::Transport(err.to_string())
}

/// Reject non-success statuses, then hand back the raw body for typed
/// deserialization
async fn ok_body(res: Response) -> crate::Result<String> {
    let status = res.status();
    if !status.is_success() {
        return Err(crate::TaskViewError::Transport(format!(
            "Unexpected status: {}",
            status
        )));
    }
    res.text().await.map_err(transport)
}
