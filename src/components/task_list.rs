//! Task List Component
//!
//! Renders placeholder rows while loading, an empty state, or one item per
//! filtered task.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::models::Task;
use crate::store::{use_app_store, AppStateStoreFields};

/// Row key for the keyed list. `<For>` reuses the existing view for any
/// retained key, so the completion flag has to be part of the key: a toggled
/// row must be rebuilt in place, not diffed away as unchanged.
fn task_key(task: &Task) -> (u64, bool) {
    (task.id, task.completed)
}

#[component]
pub fn TaskList(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| {
                view! {
                    <div class="task-list">
                        {(0..5).map(|_| view! { <div class="task-placeholder"></div> }).collect_view()}
                    </div>
                }
            }
        >
            <Show
                when=move || !tasks.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <h3>"No tasks found"</h3>
                            <p>"Create a new task or adjust your filters"</p>
                        </div>
                    }
                }
            >
                <div class="task-list">
                    <For each=move || tasks.get() key=task_key let:task>
                        <TaskItem task=task />
                    </For>
                </div>
            </Show>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::set_completed;

    fn make_task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            user_id: 1,
        }
    }

    #[test]
    fn test_toggled_row_gets_a_new_key() {
        let mut tasks = vec![
            make_task(5, "Write report", false),
            make_task(6, "Ship build", false),
        ];
        let before: Vec<_> = tasks.iter().map(task_key).collect();

        set_completed(&mut tasks, 5, true);
        let after: Vec<_> = tasks.iter().map(task_key).collect();

        // The flipped row is rebuilt; the untouched row keeps its identity
        assert_ne!(before[0], after[0]);
        assert_eq!(before[1], after[1]);
    }
}
