//! Task Item Component
//!
//! One row: checkbox glyph and text (click toggles), delete button.
//! Pending rows are drag sources and drop targets; completed rows are neither.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::AppContext;
use crate::models::Task;

use leptos_dragdrop::*;

/// A single task row
#[component]
pub fn TaskItem(
    task: Task,
    dnd: DndSignals,
    pending_order: Signal<Vec<u32>>,
    on_key_drop: Callback<(u32, u32)>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let id = task.id;
    let completed = task.completed;
    let draggable = !completed;

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id, draggable);
    let on_mouseenter = make_on_item_mouseenter(dnd, id, draggable);
    let on_mouseleave = make_on_mouseleave(dnd);
    let on_keydown = make_on_keydown(dnd, id, draggable, pending_order, on_key_drop);

    // Visual state
    let is_dragging = move || dnd.dragging_id() == Some(id);
    let is_drop_target = move || dnd.over_id() == Some(id) && !is_dragging();

    let row_class = move || {
        let mut c = String::from("task-item");
        if completed { c.push_str(" completed"); }
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let toggle_api = ctx.api.clone();
    let on_toggle = move |_: web_sys::MouseEvent| {
        // The release of a drag is not a click
        if dnd.drag_just_ended.get_untracked() { return; }
        let api = toggle_api.clone();
        spawn_local(async move {
            actions::toggle_task(&api, &store, id, completed).await;
        });
    };

    let delete_api = ctx.api;
    let on_delete = move |_: web_sys::MouseEvent| {
        let api = delete_api.clone();
        spawn_local(async move {
            actions::delete_task(&api, &store, id).await;
        });
    };

    view! {
        <li
            class=row_class
            tabindex="0"
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:keydown=on_keydown
        >
            <div class="task-item-left" on:click=on_toggle>
                <div class={if completed { "checkbox-icon checked" } else { "checkbox-icon" }}>
                    <span class="material-symbols-outlined">
                        {if completed { "check" } else { "check_box_outline_blank" }}
                    </span>
                </div>
                <span class={if draggable { "task-text drag-handle" } else { "task-text" }}>
                    {task.text}
                </span>
            </div>
            <button class="delete-btn" on:click=on_delete>
                <span class="material-symbols-outlined">"delete"</span>
            </button>
        </li>
    }
}
