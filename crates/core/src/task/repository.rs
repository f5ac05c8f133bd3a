//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Task;
use super::schema::ValidTaskPatch;
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    /// Get all tasks in insertion order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Apply a patch to an existing task.
    ///
    /// Fails with `Error::TaskNotFound` when no task has this id.
    async fn update(&self, id: Uuid, patch: ValidTaskPatch) -> Result<Task>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
