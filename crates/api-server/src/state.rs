//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tm_core::task::FileTaskStore;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    data_dir: PathBuf,
    task_store: FileTaskStore,
}

impl AppState {
    /// Open the task store at `config.tasks_path()`
    pub async fn new(config: &ServerConfig) -> tm_core::Result<Self> {
        let task_store = FileTaskStore::new(config.tasks_path()).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                data_dir: config.data_dir.clone(),
                task_store,
            }),
        })
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &FileTaskStore {
        &self.inner.task_store
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }
}
