//! Task List View Component
//!
//! Displays tasks pending-first with drag-and-drop reordering.
//! Uses leptos-dragdrop; only pending tasks take part in a drag.

use leptos::prelude::*;

use crate::actions;
use crate::board::{display_order, pending_ids};
use crate::components::TaskItem;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

use leptos_dragdrop::*;

/// Task list component with DnD support
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Pointer drops
    bind_global_mouseup(dnd, move |source, target| {
        log::debug!("[DND] Drop: source={}, target={}", source, target);
        actions::reorder_tasks(&store, source, target);
    });

    // Keyboard drops
    let on_key_drop = Callback::new(move |(source, target): (u32, u32)| {
        log::debug!("[DND] Key drop: source={}, target={}", source, target);
        actions::reorder_tasks(&store, source, target);
    });

    let pending_order = Signal::derive(move || pending_ids(&store.tasks().read()));
    let displayed = move || display_order(&store.tasks().read());

    view! {
        <ul class="task-list">
            <For
                each=displayed
                key=|task| (task.id, task.completed, task.text.clone())
                children=move |task| {
                    view! {
                        <TaskItem
                            task=task
                            dnd=dnd
                            pending_order=pending_order
                            on_key_drop=on_key_drop
                        />
                    }
                }
            />
        </ul>
    }
}
