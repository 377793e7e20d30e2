//! Transient toast notifications.
//!
//! Mutations report their outcome here: a toast appears, lives for
//! [`ToastOptions::duration_secs`] (3 s by default) and removes itself.
//! [`ToastProvider`] owns the stack and renders it above the app.

use dioxus::prelude::*;

use crate::time::sleep_secs;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Default lifetime of a toast, in seconds.
pub const DEFAULT_TOAST_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

/// Per-toast display options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub duration_secs: u64,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self {
            duration_secs: DEFAULT_TOAST_SECS,
        }
    }

    pub fn duration_secs(mut self, secs: u64) -> Self {
        self.duration_secs = secs;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for pushing toasts. `Copy`; obtained via [`use_toast`].
#[derive(Clone, Copy, PartialEq)]
pub struct ToastHandle {
    stack: Signal<ToastStack>,
}

impl ToastHandle {
    pub fn success(&self, text: impl Into<String>, options: ToastOptions) {
        self.push(ToastLevel::Success, text.into(), options);
    }

    pub fn error(&self, text: impl Into<String>, options: ToastOptions) {
        self.push(ToastLevel::Error, text.into(), options);
    }

    fn push(&self, level: ToastLevel, text: String, options: ToastOptions) {
        let mut stack = self.stack;
        let id = {
            let mut s = stack.write();
            s.next_id += 1;
            let id = s.next_id;
            s.toasts.push(Toast { id, level, text });
            id
        };
        spawn(async move {
            sleep_secs(options.duration_secs).await;
            stack.write().toasts.retain(|t| t.id != id);
        });
    }
}

/// Access the toast stack provided by [`ToastProvider`].
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        stack: use_context::<Signal<ToastStack>>(),
    }
}

/// Owns the toast stack and renders it in a fixed corner overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let stack = use_context_provider(|| Signal::new(ToastStack::default()));
    let toasts = stack.read().toasts.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        {children}

        div {
            class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast toast-success",
                        ToastLevel::Error => "toast toast-error",
                    },
                    "{toast.text}"
                }
            }
        }
    }
}
