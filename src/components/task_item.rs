//! Task Item Component
//!
//! One row of the list: completion checkbox, text, status badge, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_toasts;
use crate::store::use_app_store;
use crate::models::Task;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let id = task.id;
    let completed = task.completed;

    // The visible state flips before the request settles, so both handlers
    // report success unconditionally.
    let toggle = move |_| {
        if completed {
            toasts.success("Task marked as pending");
        } else {
            toasts.success("Task completed!");
        }
        spawn_local(async move {
            actions::toggle_task(store, id).await;
        });
    };

    let delete = move |_| {
        toasts.success("Task deleted");
        spawn_local(async move {
            actions::delete_task(store, id).await;
        });
    };

    view! {
        <div class=if completed { "task-item completed" } else { "task-item" }>
            <button class="task-checkbox" on:click=toggle>
                {completed.then_some("✓")}
            </button>
            <p class="task-text">{task.text}</p>
            <span class="task-badge">
                {if completed { "Completed" } else { "Pending" }}
            </span>
            <button class="task-delete" aria-label="Delete task" on:click=delete>
                "×"
            </button>
        </div>
    }
}
