//! Task Repository - In-Memory Storage
//!
//! Volatile task table. Everything is lost when the process exits;
//! `seeded()` and `reset()` give the fixed starting set back.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{seed_tasks, DomainError, DomainResult, Entity, Task};
use super::traits::Repository;

/// Tasks in insertion order plus the next id to hand out
#[derive(Debug)]
struct TaskTable {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskTable {
    fn empty() -> Self {
        Self { tasks: Vec::new(), next_id: 1 }
    }

    fn seeded() -> Self {
        let tasks = seed_tasks();
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }
}

/// In-memory implementation of the Task repository
#[derive(Debug)]
pub struct InMemoryTaskRepository {
    table: Mutex<TaskTable>,
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskRepository {
    /// Empty store, ids start at 1
    pub fn new() -> Self {
        Self { table: Mutex::new(TaskTable::empty()) }
    }

    /// Store holding the seed tasks, ids continue after them
    pub fn seeded() -> Self {
        Self { table: Mutex::new(TaskTable::seeded()) }
    }

    /// Drop everything and restore the seed tasks and id counter
    pub async fn reset(&self) {
        *self.table.lock().await = TaskTable::seeded();
    }
}

fn not_found(id: u32) -> DomainError {
    DomainError::NotFound(format!("Task {} not found", id))
}

#[async_trait]
impl Repository<Task> for InMemoryTaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        Task::validate_text(&entity.text)?;

        let mut table = self.table.lock().await;
        let task = Task {
            id: table.next_id,
            text: entity.text.clone(),
            completed: entity.completed,
        };
        table.next_id += 1;
        table.tasks.push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Task>> {
        let table = self.table.lock().await;
        Ok(table.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let table = self.table.lock().await;
        Ok(table.tasks.clone())
    }

    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        Task::validate_text(&entity.text)?;

        let id = entity.id();
        let mut table = self.table.lock().await;
        let slot = table
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = entity.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut table = self.table.lock().await;
        let before = table.tasks.len();
        table.tasks.retain(|t| t.id != id);
        if table.tasks.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
