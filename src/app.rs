//! Task Board Frontend App
//!
//! Main application component: add form, task list, counts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::commands::{HttpTaskApi, API_URL};
use crate::components::{NewTaskForm, TaskListView};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, HttpTaskApi::new(API_URL));

    // Provide context to all children
    provide_context(ctx.clone());

    // Load tasks once on mount
    let api = ctx.api.clone();
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            actions::load_tasks(&api, &store).await;
        });
    });

    let counts = move || {
        let tasks = store.tasks().read();
        let pending = tasks.iter().filter(|t| !t.completed).count();
        format!("{} pending, {} total", pending, tasks.len())
    };

    view! {
        <div class="app-container">
            <h1>"My TO-DO List ✅"</h1>

            <NewTaskForm />

            <TaskListView />

            <p class="task-count">{counts}</p>
        </div>
    }
}
