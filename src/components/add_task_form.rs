//! Add Task Form Component
//!
//! Text input plus submit button for creating new tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::actions;
use crate::context::use_toasts;
use crate::store::use_app_store;

/// Form for creating a new task. Submission is disabled while the trimmed
/// text is empty or a previous submission is still in flight.
#[component]
pub fn AddTaskForm() -> impl IntoView {
    let store = use_app_store();
    let toasts = use_toasts();

    let (text, set_text) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let can_submit = move || !text.get().trim().is_empty() && !submitting.get();

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = text.get().trim().to_string();
        if trimmed.is_empty() || submitting.get() {
            return;
        }
        set_submitting.set(true);

        spawn_local(async move {
            if actions::add_task(store, trimmed).await {
                toasts.success("Task added successfully");
                set_text.set(String::new());
            } else {
                toasts.error("Failed to add task");
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="add-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || text.get()
                prop:disabled=move || submitting.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_text.set(input.value());
                }
            />
            <button type="submit" prop:disabled=move || !can_submit()>
                "Add Task"
            </button>
        </form>
    }
}
