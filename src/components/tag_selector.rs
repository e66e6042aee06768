//! Tag Selector Component
//!
//! Toggle buttons for one multi-valued tag group.

use leptos::prelude::*;

use crate::form::{ItemDraft, TagGroup};

/// Toggle buttons for `group`; any number may be active
#[component]
pub fn TagSelector(group: TagGroup, draft: RwSignal<ItemDraft>) -> impl IntoView {
    view! {
        <fieldset class="tag-selector">
            <legend>{group.label()}</legend>
            {group.options().iter().map(|value| {
                let value: &'static str = value;
                let is_selected = move || draft.with(|d| d.tags(group).contains(value));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "tag-btn active" } else { "tag-btn" }
                        aria-pressed=move || is_selected().to_string()
                        on:click=move |_| draft.update(|d| d.toggle(group, value))
                    >
                        {value}
                    </button>
                }
            }).collect_view()}
        </fieldset>
    }
}
