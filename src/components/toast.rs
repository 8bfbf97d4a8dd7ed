//! Toast Component
//!
//! Renders the current transient notification, if any.

use leptos::prelude::*;

use crate::context::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        {move || toasts.current.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast success",
                ToastKind::Error => "toast error",
            };
            view! { <div class=class>{toast.message}</div> }
        })}
    }
}
