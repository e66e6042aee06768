//! Shoe Admin App
//!
//! Root component: login gate, sidebar layout and page switching.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{Sidebar, Toaster};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::pages::{AddItemPage, AllItemsPage, LoginPage, OrdersPage, RevenuePage};
use crate::session::{Authenticator, LocalStorageStore, Session};
use crate::toast::Toasts;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let toasts = Toasts::new(config.toast_duration_ms);
    let session = Session::new(Authenticator::new(Arc::new(LocalStorageStore::new()), &config));
    tracing::info!(api = %config.api_base, "starting admin");
    let api = ApiClient::new(config);

    // Provide context to all children
    provide_context(toasts);
    let ctx = AppContext::new(api, session.clone(), toasts, signal(Page::Revenue));
    provide_context(ctx.clone());

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <div class="admin-layout">
                <Sidebar />
                <main class="main-content">
                    {
                        let page = ctx.page;
                        move || match page.get() {
                            Page::Revenue => view! { <RevenuePage /> }.into_any(),
                            Page::Orders => view! { <OrdersPage /> }.into_any(),
                            Page::AddItem => view! { <AddItemPage /> }.into_any(),
                            Page::AllItems => view! { <AllItemsPage /> }.into_any(),
                        }
                    }
                </main>
            </div>
        </Show>
        <Toaster />
    }
}
