//! Client state store
//!
//! All view state lives in one `TaskManagerState`. Every transition that
//! touches the snapshot, the filter or the search text re-derives the
//! visible list before returning, so readers never observe a stale view.

use tm_core::task::Task;
use uuid::Uuid;

use crate::filter::{visible_tasks, StatusCounts, StatusFilter};

#[derive(Debug, Clone, Default)]
pub struct TaskManagerState {
    all_tasks: Vec<Task>,
    visible_tasks: Vec<Task>,
    editing_task: Option<Task>,
    is_loading: bool,
    error_message: Option<String>,
    status_filter: StatusFilter,
    search_text: String,
}

impl TaskManagerState {
    /// Pure derivation of the visible list from snapshot, filter and search
    pub fn derive_visible(&self) -> Vec<Task> {
        visible_tasks(&self.all_tasks, self.status_filter, &self.search_text)
    }

    fn rederive(&mut self) {
        self.visible_tasks = self.derive_visible();
    }

    pub fn all_tasks(&self) -> &[Task] {
        &self.all_tasks
    }

    pub fn visible_tasks(&self) -> &[Task] {
        &self.visible_tasks
    }

    pub fn editing_task(&self) -> Option<&Task> {
        self.editing_task.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::of(&self.all_tasks)
    }

    pub fn find_task(&self, id: Uuid) -> Option<&Task> {
        self.all_tasks.iter().find(|t| t.id == id)
    }

    /// Replace the snapshot with a freshly fetched collection
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.all_tasks = tasks;
        self.rederive();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.rederive();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.rederive();
    }

    pub fn select(&mut self, task: Task) {
        self.editing_task = Some(task);
    }

    pub fn clear_selection(&mut self) {
        self.editing_task = None;
    }

    /// Enter the loading state, clearing any previous error
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    pub fn finish_loading(&mut self, error: Option<String>) {
        if error.is_some() {
            self.error_message = error;
        }
        self.is_loading = false;
    }
}
