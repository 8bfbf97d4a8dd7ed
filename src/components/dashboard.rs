//! Dashboard Component
//!
//! Main page layout: header, stats row, add form, filters, task list.

use leptos::prelude::*;

use crate::components::{AddTaskForm, StatsCard, TaskFilters, TaskList, ToastHost};
use crate::store::{filtered_tasks, task_counts, use_app_store};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();
    let counts = task_counts(store);
    let tasks = filtered_tasks(store);

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"TaskFlow"</h1>
                <p class="subtitle">"Manage your tasks with ease"</p>
            </header>

            <div class="stats-row">
                <StatsCard
                    title="Total Tasks"
                    value=Signal::derive(move || counts.get().all)
                />
                <StatsCard
                    title="Pending"
                    value=Signal::derive(move || counts.get().pending)
                    variant="primary"
                />
                <StatsCard
                    title="Completed"
                    value=Signal::derive(move || counts.get().completed)
                    variant="success"
                />
            </div>

            <AddTaskForm />

            <TaskFilters counts=counts />

            <main>
                <TaskList tasks=tasks />
            </main>

            <ToastHost />
        </div>
    }
}
