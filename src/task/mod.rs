//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task as tracked by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    /// Task has not been completed yet
    #[default]
    Pending,

    /// Task is done
    Completed,
}

impl TaskStatus {
    /// The other status value
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    /// Status as the string the backend uses
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task record as projected to the client
///
/// The field set is the contract: a response carrying extra or missing
/// fields fails deserialization instead of being silently accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Unique task identifier, assigned by the backend
    pub id: String,

    /// Display title
    pub title: String,

    /// Display description
    pub desc: String,

    /// Current status of the task
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task with the given identity and text
    pub fn new(id: impl Into<String>, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            desc: desc.into(),
            status: TaskStatus::default(),
        }
    }

    /// Set the status of the task (chainable)
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Check whether the task is completed
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
