//! Toast channel: ephemeral notifications stacked in enqueue order.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use uuid::Uuid;

/// Default time a toast stays visible.
pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

/// One queued toast. The id is the removal key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
}

/// The channel itself; provided via context at the application root.
/// Asking for it where it was never provided is a programming error
/// (`expect_context` panics), not a recoverable condition.
pub type Toasts = RwSignal<Vec<Toast>>;

/// Enqueue a toast with the default duration.
pub fn show_toast(toasts: Toasts, message: impl Into<String>, kind: ToastKind) {
    show_toast_for(toasts, message, kind, DEFAULT_DURATION_MS);
}

/// Enqueue a toast and remove it after `duration_ms`. Each call is an
/// independent toast; concurrent ones stack.
pub fn show_toast_for(toasts: Toasts, message: impl Into<String>, kind: ToastKind, duration_ms: u64) {
    let toast = Toast { id: Uuid::new_v4(), message: message.into(), kind };
    let id = toast.id;
    toasts.update(|list| list.push(toast));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(duration_ms)).await;
        toasts.update(|list| list.retain(|t| t.id != id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, duration_ms);
    }
}

/// Fixed-position container rendering the queue.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        view! { <div class=toast.kind.css_class()>{toast.message}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
