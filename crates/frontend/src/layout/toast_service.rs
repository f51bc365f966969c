//! Transient notifications ("Files uploaded", "Copied to clipboard", ...).
//!
//! `ToastService` is created once by `App` as part of `AppServices`; pages
//! call `show`/`error` and the `Toaster` in the shell renders the queue.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    dismiss_ms: u32,
}

impl ToastService {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            dismiss_ms,
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: Uuid) {
        // The service may outlive its signal by one timer tick after shutdown
        let _ = self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    /// Drops every pending toast
    pub fn clear(&self) {
        let _ = self.toasts.try_update(|toasts| toasts.clear());
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    fn push(&self, title: String, description: String, variant: ToastVariant) {
        let toast = Toast {
            id: Uuid::new_v4(),
            title,
            description,
            variant,
        };
        let id = toast.id;
        log::debug!("toast: {}", toast.title);
        self.toasts.update(|toasts| toasts.push(toast));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.dismiss_ms).await;
            this.dismiss(id);
        });
    }
}

/// Renders the toast queue in the bottom-right corner
#[component]
pub fn Toaster(service: ToastService) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || service.toasts().get()
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast__text">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
