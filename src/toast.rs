//! Toast Notifications
//!
//! Transient messages queued through context and dismissed on a timer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Toast queue handle
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<(u32, Toast)>>,
    next_id: RwSignal<u32>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            duration_ms,
        }
    }

    pub fn entries(&self) -> Vec<(u32, Toast)> {
        self.entries.get()
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.entries.update(|entries| entries.push((id, toast)));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.duration_ms).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.entries.update(|entries| entries.retain(|(entry_id, _)| *entry_id != id));
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(Toast::success(title, description));
    }

    pub fn error(&self, description: impl Into<String>) {
        self.push(Toast::error(description));
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
