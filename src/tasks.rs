//! Task Collection Helpers
//!
//! Pure functions over the in-memory task collection: filtering, counts,
//! optimistic mutation/compensation primitives, and local id generation.
//! Kept browser-free so the adapter logic stays unit-testable.

use crate::models::{Task, TaskCounts, TaskFilter};

/// Highest id the remote demo API actually tracks. Ids above this are
/// client-generated for the current session and unknown to the server,
/// so failed updates/deletes against them are expected and never reverted.
pub const SERVER_ID_CEILING: u64 = 150;

/// Whether the remote API knows about this id
pub fn is_server_known(id: u64) -> bool {
    id <= SERVER_ID_CEILING
}

/// Whether a failed mutation against `id` must be compensated locally
pub fn should_revert(id: u64, request_ok: bool) -> bool {
    !request_ok && is_server_known(id)
}

/// Subsequence of tasks matching the search string (case-insensitive
/// substring) and the completion filter, in collection order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter, search: &str) -> Vec<Task> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.text.to_lowercase().contains(&needle) && filter.matches(task))
        .cloned()
        .collect()
}

/// Counts over the full, unfiltered collection
pub fn count_tasks(tasks: &[Task]) -> TaskCounts {
    TaskCounts {
        all: tasks.len(),
        pending: tasks.iter().filter(|t| !t.completed).count(),
        completed: tasks.iter().filter(|t| t.completed).count(),
    }
}

/// Set the completion flag of the task with `id`. No-op when absent,
/// which makes late compensation against a deleted task harmless.
pub fn set_completed(tasks: &mut [Task], id: u64, completed: bool) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = completed;
    }
}

/// Prepend a freshly created task; new tasks go to the front
pub fn prepend_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

/// Remove the task with `id`, returning it with its original position
pub fn remove_task(tasks: &mut Vec<Task>, id: u64) -> Option<(usize, Task)> {
    let index = tasks.iter().position(|t| t.id == id)?;
    Some((index, tasks.remove(index)))
}

/// Reinsert a task at its remembered position, clamped to the current
/// length (the collection may have shrunk while the request was in flight)
pub fn insert_task_at(tasks: &mut Vec<Task>, index: usize, task: Task) {
    tasks.insert(index.min(tasks.len()), task);
}

/// Fresh client-side id derived from wall-clock milliseconds. Always above
/// `SERVER_ID_CEILING` and bumped past any id already in the collection.
pub fn next_local_id(tasks: &[Task], now_ms: u64) -> u64 {
    let mut id = now_ms.max(SERVER_ID_CEILING + 1);
    while tasks.iter().any(|t| t.id == id) {
        id += 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskFilter};

    fn make_task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            user_id: 1,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, "Buy milk", false),
            make_task(2, "Walk dog", true),
        ]
    }

    #[test]
    fn test_filter_by_completion() {
        let tasks = sample();

        let completed = filter_tasks(&tasks, TaskFilter::Completed, "");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 2);

        let pending = filter_tasks(&tasks, TaskFilter::Pending, "");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 1);

        assert_eq!(filter_tasks(&tasks, TaskFilter::All, "").len(), 2);
    }

    #[test]
    fn test_filter_by_search_case_insensitive() {
        let tasks = sample();

        let hits = filter_tasks(&tasks, TaskFilter::All, "milk");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter_tasks(&tasks, TaskFilter::All, "MILK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        assert!(filter_tasks(&tasks, TaskFilter::All, "laundry").is_empty());
    }

    #[test]
    fn test_filter_combines_search_and_completion() {
        let tasks = sample();
        // "milk" matches only task 1, which is pending
        assert!(filter_tasks(&tasks, TaskFilter::Completed, "milk").is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let tasks = vec![
            make_task(3, "task c", false),
            make_task(1, "task a", false),
            make_task(2, "task b", false),
        ];
        let filtered = filter_tasks(&tasks, TaskFilter::All, "task");
        let ids: Vec<u64> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_counts() {
        let counts = count_tasks(&sample());
        assert_eq!(counts.all, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn test_set_completed_targets_only_matching_task() {
        let mut tasks = sample();
        set_completed(&mut tasks, 1, true);
        assert!(tasks[0].completed);
        assert!(tasks[1].completed); // untouched

        set_completed(&mut tasks, 999, false); // absent id is a no-op
        assert!(tasks[0].completed);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_simulated_failed_toggle_reverts_only_server_known_ids() {
        // Server-known id: flip optimistically, request fails, revert
        let mut tasks = sample();
        set_completed(&mut tasks, 1, true);
        if should_revert(1, false) {
            set_completed(&mut tasks, 1, false);
        }
        assert!(!tasks[0].completed);

        // Locally created id: flip survives the failed request
        let mut tasks = vec![make_task(1_700_000_000_000, "Local task", false)];
        set_completed(&mut tasks, 1_700_000_000_000, true);
        if should_revert(1_700_000_000_000, false) {
            set_completed(&mut tasks, 1_700_000_000_000, false);
        }
        assert!(tasks[0].completed);
    }

    #[test]
    fn test_add_prepends_with_unique_local_id() {
        let mut tasks = sample();
        let id = next_local_id(&tasks, 1_700_000_000_000);
        assert!(tasks.iter().all(|t| t.id != id));

        prepend_task(&mut tasks, make_task(id, "New task", false));
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].text, "New task");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_should_revert_threshold() {
        assert!(should_revert(150, false));
        assert!(!should_revert(151, false));
        assert!(!should_revert(150, true));
        assert!(!should_revert(151, true));
    }

    #[test]
    fn test_remove_and_reinsert_at_original_index() {
        let mut tasks = vec![
            make_task(1, "first", false),
            make_task(2, "second", false),
            make_task(3, "third", false),
        ];

        let (index, removed) = remove_task(&mut tasks, 2).expect("task 2 exists");
        assert_eq!(index, 1);
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.id != 2));

        insert_task_at(&mut tasks, index, removed);
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_missing_task_is_none() {
        let mut tasks = sample();
        assert!(remove_task(&mut tasks, 42).is_none());
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_reinsert_index_clamped_after_shrink() {
        let mut tasks = vec![make_task(1, "only", false)];
        // Remembered index 5 from a larger snapshot: insert lands at the end
        insert_task_at(&mut tasks, 5, make_task(2, "late revert", false));
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, 2);
    }

    #[test]
    fn test_next_local_id_is_unique_and_above_ceiling() {
        // Wall clock is in milliseconds, far above the server range
        let tasks = sample();
        let id = next_local_id(&tasks, 1_700_000_000_000);
        assert_eq!(id, 1_700_000_000_000);
        assert!(!is_server_known(id));
        assert!(tasks.iter().all(|t| t.id != id));

        // Collision with an existing id bumps forward
        let tasks = vec![
            make_task(1_700_000_000_000, "a", false),
            make_task(1_700_000_000_001, "b", false),
        ];
        assert_eq!(next_local_id(&tasks, 1_700_000_000_000), 1_700_000_000_002);

        // Even a bogus small clock never produces a server-known id
        assert!(next_local_id(&[], 7) > SERVER_ID_CEILING);
    }
}
