//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/thiserror).

mod entity;
mod task;

pub use entity::{Entity, DomainError, DomainResult};
pub use task::{seed_tasks, Task, TaskPatch, TEXT_REQUIRED};
