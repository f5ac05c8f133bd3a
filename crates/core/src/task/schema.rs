//! Typed request schema for the task collection
//!
//! Request bodies are decoded into these loose shapes first, then checked
//! field by field. Validation never throws: it returns every failing field
//! at once as a `ValidationErrors` list.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{Task, TaskStatus};

const TITLE_REQUIRED: &str = "is required";
const TITLE_EMPTY: &str = "must not be empty";
const STATUS_INVALID: &str = "must be one of Pending, In Progress, Completed";

/// A single failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field that failed validation, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Status arrives untyped so a number or object is a field error, not a
/// rejected body. `null` counts as absent.
fn check_status(raw: Option<Value>, errors: &mut ValidationErrors) -> Option<TaskStatus> {
    let parsed = match raw? {
        Value::Null => return None,
        Value::String(name) => name.parse::<TaskStatus>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        errors.push("status", STATUS_INVALID);
    }
    parsed
}

/// Body of a create request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// A create request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidNewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl NewTask {
    /// Check required fields and the status enum.
    ///
    /// The title must be present and non-empty. Whitespace-only titles are
    /// accepted here; trimming is the client's job.
    pub fn validate(self) -> Result<ValidNewTask, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = match self.title {
            None => {
                errors.push("title", TITLE_REQUIRED);
                String::new()
            }
            Some(title) if title.is_empty() => {
                errors.push("title", TITLE_EMPTY);
                title
            }
            Some(title) => title,
        };
        let status = check_status(self.status, &mut errors).unwrap_or_default();

        errors.into_result(ValidNewTask {
            title,
            description: self.description,
            status,
        })
    }
}

impl ValidNewTask {
    /// Build the stored document, assigning id and timestamps
    pub fn into_task(self) -> Task {
        let mut task = Task::new(self.title).with_status(self.status);
        task.description = self.description;
        task
    }
}

/// Body of an update request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// An update request that passed validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidTaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn validate(self) -> Result<ValidTaskPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if matches!(self.title.as_deref(), Some("")) {
            errors.push("title", TITLE_EMPTY);
        }
        let status = check_status(self.status, &mut errors);

        errors.into_result(ValidTaskPatch {
            title: self.title,
            description: self.description,
            status,
        })
    }
}

impl ValidTaskPatch {
    /// Replace the named fields on `task`. Timestamps are the store's concern.
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}
