//! Application Context
//!
//! Toast notification state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays visible, in milliseconds
const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide toast surface; newest message wins
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Currently visible toast - read
    pub current: ReadSignal<Option<Toast>>,
    /// Currently visible toast - write
    set_current: WriteSignal<Option<Toast>>,
    /// Sequence counter so a stale dismiss timer never clears a newer toast
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new(current: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>)) -> Self {
        Self {
            current: current.0,
            set_current: current.1,
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.set_current.set(Some(Toast { id, kind, message }));

        let current = self.current;
        let set_current = self.set_current;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if current.get_untracked().as_ref().map(|t| t.id) == Some(id) {
                set_current.set(None);
            }
        });
    }
}

/// Get the toast context
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
