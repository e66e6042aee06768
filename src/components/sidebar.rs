//! Sidebar Component
//!
//! Page navigation and logout.

use leptos::prelude::*;

use crate::context::{use_app, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app();
    let nav = ctx.clone();

    let logout = move |_| {
        ctx.session.logout();
        ctx.toasts.success("Logged out", "You've been successfully logged out.");
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Shoe Admin"</div>
            <nav class="sidebar-nav">
                {Page::ALL.into_iter().map(|page| {
                    let ctx = nav.clone();
                    let page_signal = nav.page;
                    view! {
                        <button
                            type="button"
                            class=move || if page_signal.get() == page { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button type="button" class="logout-btn" on:click=logout>
                "Logout"
            </button>
        </aside>
    }
}
