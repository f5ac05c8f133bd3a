//! Task manager: the client's command layer
//!
//! Each mutation is a command that reports an [`Outcome`] and never
//! refetches on its own. Call sites that want the canonical collection
//! back (`submit_form`, `remove_task`, the CLI) call [`TaskManager::refresh`]
//! explicitly after a successful command.

use tm_core::task::Task;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::TaskApi;
use crate::error::{FormError, Result};
use crate::filter::StatusFilter;
use crate::form::{TaskDraft, TaskForm};
use crate::state::TaskManagerState;

/// Result of a single API command
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Failed,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

pub struct TaskManager<A> {
    api: A,
    state: TaskManagerState,
    form: TaskForm,
}

impl<A: TaskApi> TaskManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TaskManagerState::default(),
            form: TaskForm::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &TaskManagerState {
        &self.state
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Leave the loading state, recording `context: cause` on failure
    fn settle<T>(&mut self, result: Result<T>, context: &str) -> Option<T> {
        match result {
            Ok(value) => {
                self.state.finish_loading(None);
                Some(value)
            }
            Err(e) => {
                warn!("{}: {}", context, e);
                self.state.finish_loading(Some(format!("{}: {}", context, e)));
                None
            }
        }
    }

    /// Fetch the full collection and replace the local snapshot
    pub async fn refresh(&mut self) -> Outcome {
        self.state.start_loading();
        let result = self.api.list_tasks().await;
        match self.settle(result, "Failed to fetch tasks") {
            Some(tasks) => {
                self.state.replace_tasks(tasks);
                Outcome::Applied
            }
            None => Outcome::Failed,
        }
    }

    pub async fn create_task(&mut self, draft: &TaskDraft) -> Outcome {
        self.state.start_loading();
        let result = self.api.create_task(draft).await;
        match self.settle(result, "Failed to add task") {
            Some(task) => {
                info!(task_id = %task.id, "Task added");
                Outcome::Applied
            }
            None => Outcome::Failed,
        }
    }

    /// Update a task; a successful update also ends the edit selection
    pub async fn update_task(&mut self, id: Uuid, draft: &TaskDraft) -> Outcome {
        self.state.start_loading();
        let result = self.api.update_task(id, draft).await;
        match self.settle(result, "Failed to update task") {
            Some(_) => {
                self.state.clear_selection();
                Outcome::Applied
            }
            None => Outcome::Failed,
        }
    }

    pub async fn delete_task(&mut self, id: Uuid) -> Outcome {
        self.state.start_loading();
        let result = self.api.delete_task(id).await;
        match self.settle(result, "Failed to delete task") {
            Some(()) => Outcome::Applied,
            None => Outcome::Failed,
        }
    }

    /// Delete, then refetch when the delete went through
    pub async fn remove_task(&mut self, id: Uuid) -> Outcome {
        let outcome = self.delete_task(id).await;
        if outcome.is_applied() {
            let _ = self.refresh().await;
        }
        outcome
    }

    /// Select a task for editing and copy it into the form buffer
    pub fn select_for_edit(&mut self, task: Task) {
        self.form.load(&task);
        self.state.select(task);
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.state.set_status_filter(filter);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.set_search_text(text);
    }

    /// Validate the form and send it as an update (when a task is
    /// selected) or a create.
    ///
    /// Validation failures are returned before any request is made and
    /// leave loading and error state alone. Once sent, the form is reset
    /// and a successful command is followed by a refetch.
    pub async fn submit_form(&mut self) -> std::result::Result<Outcome, FormError> {
        let draft = self.form.validate()?;

        let outcome = match self.state.editing_task().map(|task| task.id) {
            Some(id) => self.update_task(id, &draft).await,
            None => self.create_task(&draft).await,
        };
        self.form.reset();

        if outcome.is_applied() {
            let _ = self.refresh().await;
        }
        Ok(outcome)
    }
}
