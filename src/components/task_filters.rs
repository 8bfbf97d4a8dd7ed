//! Task Filters Component
//!
//! Search input plus filter tabs, each labeled with its count from the
//! unfiltered collection.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{TaskCounts, TaskFilter};
use crate::store::{use_app_store, AppStateStoreFields};

const FILTER_OPTIONS: &[TaskFilter] = &[TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

#[component]
pub fn TaskFilters(#[prop(into)] counts: Signal<TaskCounts>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="task-filters">
            <input
                class="search-input"
                type="text"
                placeholder="Search tasks..."
                prop:value=move || store.search().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.search().set(input.value());
                }
            />

            <div class="filter-tabs">
                {FILTER_OPTIONS.iter().map(|&option| {
                    let is_active = move || store.filter().get() == option;
                    let count = move || {
                        let counts = counts.get();
                        match option {
                            TaskFilter::All => counts.all,
                            TaskFilter::Pending => counts.pending,
                            TaskFilter::Completed => counts.completed,
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| store.filter().set(option)
                        >
                            {option.label()}
                            <span class="filter-count">"(" {count} ")"</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
