//! HTTP client for the task API

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tm_core::task::Task;
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::form::TaskDraft;

const TASKS_PATH: &str = "/api/tasks";

/// Calls the client issues against the task API
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task>;

    async fn update_task(&self, id: Uuid, draft: &TaskDraft) -> Result<Task>;

    async fn delete_task(&self, id: Uuid) -> Result<()>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct HttpTaskApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn task_url(&self, id: Uuid) -> String {
        self.config.endpoint(&format!("{}/{}", TASKS_PATH, id))
    }

    /// Turn a non-success response into `ClientError::Status`, preferring
    /// the server's `{error}` message over the raw body.
    async fn check(res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let text = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        Err(ClientError::status(status.as_u16(), message))
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T> {
        let res = Self::check(res).await?;
        res.json::<T>()
            .await
            .map_err(|e| ClientError::decode(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::transport(e.to_string())
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let url = self.config.endpoint(TASKS_PATH);
        debug!("GET {}", url);
        let res = self.client.get(url).send().await.map_err(transport)?;
        Self::decode(res).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let url = self.config.endpoint(TASKS_PATH);
        debug!("POST {}", url);
        let res = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(res).await
    }

    async fn update_task(&self, id: Uuid, draft: &TaskDraft) -> Result<Task> {
        let url = self.task_url(id);
        debug!("PUT {}", url);
        let res = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        Self::decode(res).await
    }

    async fn delete_task(&self, id: Uuid) -> Result<()> {
        let url = self.task_url(id);
        debug!("DELETE {}", url);
        let res = self.client.delete(url).send().await.map_err(transport)?;
        Self::check(res).await?;
        Ok(())
    }
}
