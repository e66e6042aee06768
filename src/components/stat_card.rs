//! Stat Card Component

use leptos::prelude::*;

/// Headline figure with an optional caption
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] caption: Signal<String>,
    #[prop(into, optional)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-title">{title}</div>
            <div class="stat-value">
                {move || if loading.get() { "…".to_string() } else { value.get() }}
            </div>
            <div class="stat-caption">{move || caption.get()}</div>
        </div>
    }
}
