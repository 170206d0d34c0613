//! Task Commands
//!
//! HTTP implementation of [`TaskApi`] on top of reqwest (fetch on wasm32).

use async_trait::async_trait;

use super::{ApiError, TaskApi};
use crate::models::{NewTask, Task, TaskPatch};

/// REST client for `/tasks`
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: u32) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.client.get(self.tasks_url()).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn create_task(&self, text: &str) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(self.tasks_url())
            .json(&NewTask { text })
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> Result<Task, ApiError> {
        let response = self
            .client
            .put(self.task_url(id))
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        self.client.delete(self.task_url(id)).send().await?.error_for_status()?;
        Ok(())
    }
}
