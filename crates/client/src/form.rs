//! Edit buffer behind the create/update form

use serde::Serialize;
use tm_core::task::{Task, TaskStatus};

use crate::error::FormError;

/// Validated, trimmed form contents as sent to the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Transient field buffer, filled from the selected task when editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskForm {
    /// Copy a task's fields into the buffer
    pub fn load(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description_text().to_string();
        self.status = task.status;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both text fields must be non-blank after trimming
    pub fn validate(&self) -> Result<TaskDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::DescriptionRequired);
        }

        Ok(TaskDraft::new(title, description).with_status(self.status))
    }
}
