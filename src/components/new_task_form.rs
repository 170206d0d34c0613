//! New Task Form Component
//!
//! Text input plus submit button for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let api = ctx.api;

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            actions::add_task(&api, &store).await;
        });
    };

    view! {
        <form class="add-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
