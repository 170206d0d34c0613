//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Mutations go through [`StateHandle`] so the action flows can run
//! against a plain `RefCell` in tests.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::models::Task;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local task sequence (server snapshot + local edits + drag order)
    pub tasks: Vec<Task>,
    /// Text in the add form
    pub draft: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Write access to the app state
pub trait StateHandle {
    fn update_tasks(&self, f: impl FnOnce(&mut Vec<Task>));
    fn current_draft(&self) -> String;
    fn replace_draft(&self, draft: String);
}

impl StateHandle for AppStore {
    fn update_tasks(&self, f: impl FnOnce(&mut Vec<Task>)) {
        let field = self.tasks();
        let mut tasks = field.write();
        f(&mut *tasks);
    }

    fn current_draft(&self) -> String {
        self.draft().get_untracked()
    }

    fn replace_draft(&self, draft: String) {
        self.draft().set(draft);
    }
}

// ========================
// Store Helper Functions
// ========================

/// Merge a fetched snapshot into the store
pub fn store_merge_snapshot(store: &impl StateHandle, snapshot: Vec<Task>) {
    store.update_tasks(|tasks| *tasks = board::merge_snapshot(tasks, snapshot));
}

/// Add a created task at the front
pub fn store_prepend_task(store: &impl StateHandle, task: Task) {
    store.update_tasks(|tasks| board::prepend_task(tasks, task));
}

/// Update a task in the store by ID, keeping its position
pub fn store_update_task(store: &impl StateHandle, updated_task: Task) {
    store.update_tasks(|tasks| {
        if !board::replace_task(tasks, updated_task) {
            log::debug!("[STORE] Updated task is no longer on the board");
        }
    });
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &impl StateHandle, task_id: u32) {
    store.update_tasks(|tasks| {
        board::remove_task(tasks, task_id);
    });
}

/// Move a task onto another task's position (local only)
pub fn store_move_task(store: &impl StateHandle, source: u32, target: u32) -> bool {
    if source == target {
        return false;
    }
    let mut moved = false;
    store.update_tasks(|tasks| moved = board::relocate(tasks, source, target));
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, completed: bool) -> Task {
        Task { id, text: format!("task {}", id), completed }
    }

    fn ids(store: &AppStore) -> Vec<u32> {
        store.tasks().get_untracked().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_helpers_write_through_the_store() {
        let owner = Owner::new();
        owner.set();
        let store: AppStore = Store::new(AppState::default());

        store_merge_snapshot(&store, vec![task(1, false), task(2, true), task(3, false)]);
        assert_eq!(ids(&store), vec![1, 2, 3]);

        store_prepend_task(&store, task(4, false));
        store_update_task(&store, task(1, true));
        assert_eq!(ids(&store), vec![4, 1, 2, 3]);
        assert!(store.tasks().get_untracked()[1].completed);

        assert!(store_move_task(&store, 4, 3));
        assert!(!store_move_task(&store, 3, 3));
        store_remove_task(&store, 2);
        assert_eq!(ids(&store), vec![1, 3, 4]);

        store.replace_draft("buy milk".to_string());
        assert_eq!(store.current_draft(), "buy milk");
    }
}
