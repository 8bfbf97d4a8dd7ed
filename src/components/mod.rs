//! UI Components
//!
//! Leptos components for the task dashboard.

mod add_task_form;
mod dashboard;
mod stats_card;
mod task_filters;
mod task_item;
mod task_list;
mod toast;

pub use add_task_form::AddTaskForm;
pub use dashboard::Dashboard;
pub use stats_card::StatsCard;
pub use task_filters::TaskFilters;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use toast::ToastHost;
