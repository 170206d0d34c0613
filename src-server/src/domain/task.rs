//! Task Entity
//!
//! A short to-do entry. The store assigns ids; order carries no meaning.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

pub const TEXT_REQUIRED: &str = "Task text is required";

/// A to-do task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store
    pub id: u32,
    /// Task text, never empty
    pub text: String,
    /// Completion status
    pub completed: bool,
}

/// Partial update; absent fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: u32, text: String) -> Self {
        Self { id, text, completed: false }
    }

    pub fn validate_text(text: &str) -> DomainResult<()> {
        if text.is_empty() {
            return Err(DomainError::InvalidInput(TEXT_REQUIRED.to_string()));
        }
        Ok(())
    }

    /// Apply a patch. Nothing changes if the patch is rejected.
    pub fn apply(&mut self, patch: TaskPatch) -> DomainResult<()> {
        if let Some(text) = &patch.text {
            Self::validate_text(text)?;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        Ok(())
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Tasks present on every fresh process start
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task { id: 1, text: "Learn Docker".to_string(), completed: false },
        Task { id: 2, text: "Build a TO-DO app".to_string(), completed: true },
        Task { id: 3, text: "Deploy the app".to_string(), completed: false },
    ]
}
