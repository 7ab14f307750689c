//! Toast notifications (share confirmation, failed like/follow/comment)

use leptos::prelude::*;
use recipeshare_core::ApiError;
use std::time::Duration;

const TOAST_MS: u64 = 3000;
const ERROR_TOAST_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn lifetime(&self) -> Duration {
        match self {
            ToastKind::Success => Duration::from_millis(TOAST_MS),
            ToastKind::Error => Duration::from_millis(ERROR_TOAST_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|toasts| toasts.retain(|t| t.id != id)),
            kind.lifetime(),
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    /// Error toast for a failed API call
    pub fn api_error(&self, error: &ApiError, fallback: &str) {
        self.error(error.user_message(fallback));
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

/// Provides [`ToastContext`] and renders the stack above `children`
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let context = ToastContext::new();
    provide_context(context);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || context.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| context.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Hook to access toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
