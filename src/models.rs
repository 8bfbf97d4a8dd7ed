//! Frontend Models
//!
//! Data structures matching the remote task API payloads.

use serde::Deserialize;

/// Task record (matches the remote API shape)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(rename = "todo")]
    pub text: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// List response: one page of tasks plus pagination metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TasksPage {
    pub todos: Vec<Task>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Which slice of the collection the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }
}

/// Aggregate counts over the unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
}
