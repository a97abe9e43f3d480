//! View state reconcilers
//!
//! Each view holds a best-effort mirror of the remote task collection.
//! The mirror is replaced wholesale on load and patched element-wise
//! only after the store confirms a mutation; a failed call leaves
//! local state exactly as it was. There is no retry, no request
//! cancellation, and no client-side mutual exclusion: callers that
//! interleave operations on one view get last-completion-wins
//! semantics.

/// Profile update form
pub mod profile;

use crate::notify::{ConfirmPrompt, Notifier};
use crate::store::RemoteStore;
use crate::task::{Task, TaskStatus};
use tracing::{debug, error};

/// Which task collection a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskQuery {
    /// Every task the backend knows about
    #[default]
    All,

    /// The server-defined recent subset
    Latest,
}

/// Local view state for a task table
#[derive(Debug, Clone)]
pub struct TaskView {
    query: TaskQuery,
    tasks: Vec<Task>,
    loading: bool,
}

impl TaskView {
    /// Create an empty view for the given query
    pub fn new(query: TaskQuery) -> Self {
        Self {
            query,
            tasks: Vec::new(),
            loading: true,
        }
    }

    /// Tasks as last fetched or patched, in server order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True from construction until the first load resolves or fails
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of tasks in the view
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the view has no tasks ("No tasks found" rendering)
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks (dashboard card)
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Number of pending tasks (dashboard card)
    pub fn pending_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    /// Look up a task by id
    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Load the view's collection from the store
    ///
    /// On success the local sequence is replaced wholesale with the
    /// response. On failure it is left unchanged and the error is only
    /// logged; there is no retry. The loading flag clears either way.
    pub async fn load<S: RemoteStore>(&mut self, store: &S) {
        let result = match self.query {
            TaskQuery::All => store.list_tasks().await,
            TaskQuery::Latest => store.latest_tasks().await,
        };

        match result {
            Ok(tasks) => {
                debug!("Loaded {} tasks", tasks.len());
                self.tasks = tasks;
            }
            Err(e) => error!("Error fetching tasks: {}", e),
        }
        self.loading = false;
    }

    /// Ask the store to change one task's status
    ///
    /// The local element is patched only after the store confirms; all
    /// other elements and their order are untouched. The request is
    /// sent even when the status equals the current one. On failure
    /// local state is unchanged and the notifier carries the error.
    pub async fn update_status<S, N>(
        &mut self,
        store: &S,
        notifier: &N,
        task_id: &str,
        new_status: TaskStatus,
    ) where
        S: RemoteStore,
        N: Notifier,
    {
        match store.update_status(task_id, new_status).await {
            Ok(ack) => {
                for task in &mut self.tasks {
                    if task.id == task_id {
                        task.status = new_status;
                    }
                }
                notifier.success(&ack.message);
            }
            Err(e) => {
                error!("Error updating status: {}", e);
                notifier.error("Failed to update status");
            }
        }
    }

    /// Delete a task after explicit confirmation
    ///
    /// Declining the prompt aborts with no request sent. On confirmed
    /// success exactly the matching element is removed, preserving the
    /// order of the rest; on failure local state is unchanged.
    pub async fn delete<S, P, N>(&mut self, store: &S, prompt: &P, notifier: &N, task_id: &str)
    where
        S: RemoteStore,
        P: ConfirmPrompt,
        N: Notifier,
    {
        if !prompt.confirm("Are you sure you want to delete this task?") {
            debug!("Delete of task {} cancelled", task_id);
            return;
        }

        match store.delete_task(task_id).await {
            Ok(ack) => {
                self.tasks.retain(|task| task.id != task_id);
                notifier.success(&ack.message);
            }
            Err(e) => error!("Error deleting task: {}", e),
        }
    }
}
