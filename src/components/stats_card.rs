//! Stats Card Component
//!
//! Small aggregate card showing one count from the collection.

use leptos::prelude::*;

/// Single stat card
///
/// # Arguments
/// * `title` - Caption under the value (e.g., "Pending")
/// * `value` - Reactive count to display
/// * `variant` - CSS variant suffix: "default", "primary", or "success"
#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(default = "default")] variant: &'static str,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <div class=format!("stats-icon {variant}")></div>
            <div>
                <p class="stats-value">{move || value.get()}</p>
                <p class="stats-title">{title}</p>
            </div>
        </div>
    }
}
