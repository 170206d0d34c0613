//! Board Utilities
//!
//! Pure functions over the local task sequence: display ordering,
//! snapshot merging, and in-place edits. No rendering, no transport.

use crate::models::Task;
use std::collections::HashMap;

/// Display order: pending tasks first, then completed.
/// Stable partition - each group keeps its order from `tasks`.
pub fn display_order(tasks: &[Task]) -> Vec<Task> {
    let (pending, completed): (Vec<Task>, Vec<Task>) =
        tasks.iter().cloned().partition(|t| !t.completed);
    pending.into_iter().chain(completed).collect()
}

/// Ids of pending tasks in display order (the reorderable block)
pub fn pending_ids(tasks: &[Task]) -> Vec<u32> {
    tasks.iter().filter(|t| !t.completed).map(|t| t.id).collect()
}

/// Merge a server snapshot into the local sequence.
///
/// Known ids keep their local position but take the server's representation,
/// new ids are appended in snapshot order, ids missing from the snapshot are dropped.
pub fn merge_snapshot(local: &[Task], snapshot: Vec<Task>) -> Vec<Task> {
    let snapshot_order: Vec<u32> = snapshot.iter().map(|t| t.id).collect();
    let mut by_id: HashMap<u32, Task> = snapshot.into_iter().map(|t| (t.id, t)).collect();

    let mut merged: Vec<Task> = local.iter().filter_map(|t| by_id.remove(&t.id)).collect();
    merged.extend(snapshot_order.iter().filter_map(|id| by_id.remove(id)));
    merged
}

/// Put a newly created task at the front
pub fn prepend_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

/// Replace a task by ID in place. Returns false if it isn't there.
pub fn replace_task(tasks: &mut [Task], updated: Task) -> bool {
    match tasks.iter_mut().find(|t| t.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove a task by ID. Returns false if it isn't there.
pub fn remove_task(tasks: &mut Vec<Task>, id: u32) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Move `source` to the index currently held by `target`, shifting the
/// tasks in between by one. Completed tasks never move.
///
/// Returns false (and leaves `tasks` untouched) when nothing moved.
pub fn relocate(tasks: &mut Vec<Task>, source: u32, target: u32) -> bool {
    if source == target {
        return false;
    }
    let Some(from) = tasks.iter().position(|t| t.id == source) else {
        return false;
    };
    let Some(to) = tasks.iter().position(|t| t.id == target) else {
        return false;
    };
    if tasks[from].completed {
        return false;
    }

    let task = tasks.remove(from);
    tasks.insert(to, task);
    true
}
