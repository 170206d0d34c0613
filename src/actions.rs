//! Board Actions
//!
//! What happens when the user loads, adds, toggles, deletes, or drags.
//! Store requests only change local state after they succeed; failures are
//! logged and otherwise ignored. Responses apply to the state as it is when
//! they arrive, so the last one to complete wins.

use crate::commands::TaskApi;
use crate::models::TaskPatch;
use crate::store::{
    store_merge_snapshot, store_move_task, store_prepend_task, store_remove_task,
    store_update_task, StateHandle,
};

/// Fetch the full collection once. On failure the board stays as it is.
pub async fn load_tasks(api: &impl TaskApi, store: &impl StateHandle) {
    match api.list_tasks().await {
        Ok(snapshot) => {
            log::info!("[BOARD] Loaded {} tasks", snapshot.len());
            store_merge_snapshot(store, snapshot);
        }
        Err(e) => log::error!("There was an error fetching the tasks: {}", e),
    }
}

/// Create a task from the draft text. Blank drafts never reach the server.
pub async fn add_task(api: &impl TaskApi, store: &impl StateHandle) {
    let draft = store.current_draft();
    let text = draft.trim();
    if text.is_empty() {
        return;
    }

    match api.create_task(text).await {
        Ok(task) => {
            log::debug!("[BOARD] Created task {}", task.id);
            store_prepend_task(store, task);
            store.replace_draft(String::new());
        }
        // Draft is kept so the user can retry
        Err(e) => log::error!("Error adding task: {}", e),
    }
}

/// Flip completion of `id`, given the value currently displayed
pub async fn toggle_task(api: &impl TaskApi, store: &impl StateHandle, id: u32, completed: bool) {
    match api.update_task(id, &TaskPatch::completed(!completed)).await {
        Ok(task) => store_update_task(store, task),
        Err(e) => log::error!("Error updating task {}: {}", id, e),
    }
}

pub async fn delete_task(api: &impl TaskApi, store: &impl StateHandle, id: u32) {
    match api.delete_task(id).await {
        Ok(()) => store_remove_task(store, id),
        Err(e) => log::error!("Error deleting task {}: {}", id, e),
    }
}

/// Drop `source` onto `target`. Local only, nothing is sent to the store.
pub fn reorder_tasks(store: &impl StateHandle, source: u32, target: u32) {
    if store_move_task(store, source, target) {
        log::debug!("[DND] Moved task {} onto {}", source, target);
    }
}
