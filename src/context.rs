//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::session::Session;
use crate::toast::Toasts;

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Revenue,
    Orders,
    AddItem,
    AllItems,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Revenue, Page::Orders, Page::AddItem, Page::AllItems];

    pub fn title(self) -> &'static str {
        match self {
            Page::Revenue => "Revenue",
            Page::Orders => "Orders",
            Page::AddItem => "Add New Item",
            Page::AllItems => "All Items",
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Shared HTTP client
    pub api: ApiClient,
    pub session: Session,
    pub toasts: Toasts,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(api: ApiClient, session: Session, toasts: Toasts, page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            api,
            session,
            toasts,
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the main view
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
