//! Task Store Actions
//!
//! The adapter between the UI and the remote API. Each mutation updates the
//! local collection optimistically, issues the request, and compensates on
//! failure only for ids the remote API actually tracks. Compensation re-reads
//! the current snapshot, so a target removed in the meantime is left alone.

use leptos::prelude::*;
use web_sys::console;

use crate::api;
use crate::store::{self, AppStateStoreFields, AppStore};
use crate::tasks;

/// Initial load: replace the collection with one page from the remote API.
/// On failure the collection stays empty and the error is fatal to the view.
pub async fn load_tasks(store: AppStore) {
    store.loading().set(true);
    let result = api::fetch_tasks(api::PAGE_LIMIT).await;
    match &result {
        Ok(page) => console::log_1(
            &format!("[TASKS] Loaded {} of {} tasks", page.todos.len(), page.total).into(),
        ),
        Err(err) => console::log_1(&format!("[TASKS] Initial load failed: {err}").into()),
    }
    store.write().apply_load_result(result);
}

/// Create a task from trimmed text and prepend it; returns true on success.
/// The demo API does not persist, so the echoed id is replaced with a
/// session-unique local one before the task enters the collection.
pub async fn add_task(store: AppStore, text: String) -> bool {
    let text = text.trim().to_string();
    if text.is_empty() {
        return false;
    }

    match api::create_task(&text).await {
        Ok(mut created) => {
            let snapshot = store.tasks().get_untracked();
            created.id = tasks::next_local_id(&snapshot, js_sys::Date::now() as u64);
            store::store_prepend_task(&store, created);
            true
        }
        Err(err) => {
            console::log_1(&format!("[TASKS] Add failed: {err}").into());
            store.error().set(Some(err));
            false
        }
    }
}

/// Flip a task's completion flag optimistically, then confirm remotely.
/// A failed request reverts the flip only for server-known ids; locally
/// created tasks keep the optimistic value since the remote sandbox cannot
/// know about them. Absent ids are a no-op.
pub async fn toggle_task(store: AppStore, id: u64) {
    let Some(prev) = store
        .tasks()
        .get_untracked()
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.completed)
    else {
        return;
    };

    tasks::set_completed(&mut *store.tasks().write(), id, !prev);

    let outcome = api::set_task_completed(id, !prev).await;
    if tasks::should_revert(id, outcome.is_ok()) {
        tasks::set_completed(&mut *store.tasks().write(), id, prev);
    }
}

/// Remove a task optimistically, then confirm remotely. A failed request
/// reinserts at the original position only for server-known ids.
pub async fn delete_task(store: AppStore, id: u64) {
    let Some((index, removed)) = tasks::remove_task(&mut *store.tasks().write(), id) else {
        return;
    };

    let outcome = api::delete_task(id).await;
    if tasks::should_revert(id, outcome.is_ok()) {
        tasks::insert_task_at(&mut *store.tasks().write(), index, removed);
    }
}
