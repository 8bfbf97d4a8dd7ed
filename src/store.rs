//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::{Task, TaskCounts, TaskFilter, TasksPage};
use crate::tasks;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full task collection, newest local tasks first
    pub tasks: Vec<Task>,
    /// True until the initial load settles
    pub loading: bool,
    /// Load error, fatal to the view
    pub error: Option<String>,
    /// Free-text search over task text
    pub search: String,
    /// Completion filter for the list
    pub filter: TaskFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Fold the initial-load outcome into the state: success replaces the
    /// collection, failure sets the error and leaves the collection empty.
    /// Loading clears either way.
    pub fn apply_load_result(&mut self, result: Result<TasksPage, String>) {
        match result {
            Ok(page) => self.tasks = page.todos,
            Err(err) => self.error = Some(err),
        }
        self.loading = false;
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a task to the collection
pub fn store_prepend_task(store: &AppStore, task: Task) {
    tasks::prepend_task(&mut store.tasks().write(), task);
}

// ========================
// Derived State
// ========================

/// Tasks matching the current search string and filter, in collection order
pub fn filtered_tasks(store: AppStore) -> Memo<Vec<Task>> {
    Memo::new(move |_| {
        tasks::filter_tasks(
            &store.tasks().get(),
            store.filter().get(),
            &store.search().get(),
        )
    })
}

/// Counts over the full, unfiltered collection
pub fn task_counts(store: AppStore) -> Memo<TaskCounts> {
    Memo::new(move |_| tasks::count_tasks(&store.tasks().get()))
}
