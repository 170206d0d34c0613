//! REST Handlers for Task CRUD
//!
//! `GET/POST /tasks`, `PUT/DELETE /tasks/{id}`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::domain::{Task, TaskPatch, TEXT_REQUIRED};
use crate::AppState;

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Path ids that don't parse can't name a task
fn parse_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse().map_err(|_| ApiError::task_not_found())
}

/// List all tasks
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.task_repo.list().await?;
    Ok(Json(tasks))
}

/// Create a new task
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let text = match payload {
        Ok(Json(CreateTaskRequest { text: Some(text) })) if !text.is_empty() => text,
        Ok(_) => {
            tracing::warn!("create rejected: missing text");
            return Err(ApiError::BadRequest(TEXT_REQUIRED.to_string()));
        }
        Err(rejection) => {
            tracing::warn!(error = %rejection, "create rejected: bad body");
            return Err(ApiError::BadRequest(TEXT_REQUIRED.to_string()));
        }
    };

    // ID will be assigned by the repository
    let created = state.task_repo.create(&Task::new(0, text)).await?;
    tracing::info!(task_id = created.id, "task created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update task text and/or completion
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(patch) = payload.map_err(|rejection| {
        tracing::warn!(task_id = id, error = %rejection, "update rejected: bad body");
        ApiError::BadRequest(rejection.body_text())
    })?;

    // First get existing task
    let mut task = state
        .task_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(task_id = id, "update of unknown task");
            ApiError::task_not_found()
        })?;

    task.apply(patch)?;
    let updated = state.task_repo.update(&task).await?;
    tracing::info!(task_id = id, completed = updated.completed, "task updated");
    Ok(Json(updated))
}

/// Delete task
pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state.task_repo.delete(id).await.map_err(|err| {
        tracing::warn!(task_id = id, error = %err, "delete failed");
        ApiError::from(err)
    })?;
    tracing::info!(task_id = id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound(_))));
        assert!(matches!(parse_id("-1"), Err(ApiError::NotFound(_))));
    }
}
