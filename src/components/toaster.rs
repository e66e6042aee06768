//! Toaster Component
//!
//! Renders the toast queue from context.

use leptos::prelude::*;

use crate::toast::{use_toasts, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.entries()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-description">{toast.description}</div>
                            <button type="button" class="toast-close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
