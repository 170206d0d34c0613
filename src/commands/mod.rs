//! Task Store Client
//!
//! Frontend bindings to the task store REST API.

mod task;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Task, TaskPatch};

pub use task::HttpTaskApi;

/// Base URL of the task store API
pub const API_URL: &str = match option_env!("TASK_BOARD_API_URL") {
    Some(url) => url,
    None => "http://localhost:5002/api",
};

/// Request failures. Never shown to the user, only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Operations the task store offers
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn create_task(&self, text: &str) -> Result<Task, ApiError>;

    async fn update_task(&self, id: u32, patch: &TaskPatch) -> Result<Task, ApiError>;

    async fn delete_task(&self, id: u32) -> Result<(), ApiError>;
}
