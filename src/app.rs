//! TaskFlow App
//!
//! Root component: wires the store and toast context, kicks off the initial
//! load, and switches between the error screen and the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::Dashboard;
use crate::context::{Toast, ToastContext};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let toast = signal::<Option<Toast>>(None);
    provide_context(ToastContext::new(toast));

    // Load one page of tasks on mount; no automatic retry
    Effect::new(move |_| {
        spawn_local(async move {
            actions::load_tasks(store).await;
        });
    });

    view! {
        <Show
            when=move || store.error().get().is_none()
            fallback=move || {
                view! {
                    <div class="error-screen">
                        <h2>"Something went wrong"</h2>
                        <p>{move || store.error().get().unwrap_or_default()}</p>
                    </div>
                }
            }
        >
            <Dashboard />
        </Show>
    }
}
