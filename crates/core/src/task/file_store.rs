//! File-based task storage implementation
//!
//! Stores the task collection as a JSON document on disk.

use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::Task;
use super::repository::TaskRepository;
use super::schema::ValidTaskPatch;
use crate::{Error, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the collection, in insertion order
    cache: RwLock<Vec<Task>>,
}

impl FileTaskStore {
    /// Open a FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if tokio::fs::try_exists(&path).await? {
            let content = tokio::fs::read_to_string(&path).await?;
            serde_json::from_str(&content).map_err(|e| {
                Error::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Write the collection to disk
    async fn persist(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, task: Task) -> Result<Task> {
        let mut cache = self.cache.write().await;
        if cache.iter().any(|t| t.id == task.id) {
            return Err(Error::Storage(format!(
                "Task with ID {} already exists",
                task.id
            )));
        }
        cache.push(task.clone());
        if let Err(e) = self.persist(&cache).await {
            cache.pop();
            return Err(e);
        }
        tracing::debug!(task_id = %task.id, "task inserted");
        Ok(task)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.clone())
    }

    async fn update(&self, id: Uuid, patch: ValidTaskPatch) -> Result<Task> {
        let mut cache = self.cache.write().await;
        let index = cache
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let previous = cache[index].clone();
        let mut task = previous.clone();
        patch.apply(&mut task);
        task.updated_at = Utc::now();
        cache[index] = task.clone();

        if let Err(e) = self.persist(&cache).await {
            cache[index] = previous;
            return Err(e);
        }
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut cache = self.cache.write().await;
        let Some(index) = cache.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let removed = cache.remove(index);
        if let Err(e) = self.persist(&cache).await {
            cache.insert(index, removed);
            return Err(e);
        }
        Ok(true)
    }
}
