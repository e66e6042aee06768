//! Item Form Fields Component
//!
//! Inputs shared by the add page and the edit dialog.

use leptos::prelude::*;

use super::{ImagePicker, TagSelector};
use crate::form::{FieldError, ItemDraft, ItemField, TagGroup};

#[component]
pub fn ItemFormFields(draft: RwSignal<ItemDraft>, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    let error_for = move |label: &'static str| {
        move || {
            errors.with(|errs| {
                errs.iter()
                    .find(|e| e.field == label)
                    .map(|e| view! { <span class="field-error">{e.message.clone()}</span> })
            })
        }
    };

    view! {
        <div class="item-form-grid">
            {ItemField::ALL.into_iter().map(|field| {
                let value = move || draft.with(|d| d.get(field).to_string());
                let on_input = move |ev: web_sys::Event| {
                    let v = event_target_value(&ev);
                    draft.update(|d| d.set(field, v));
                };
                let input = if field == ItemField::Description {
                    view! { <textarea prop:value=value on:input=on_input rows="3"></textarea> }.into_any()
                } else {
                    let input_type = if field.is_numeric() { "number" } else { "text" };
                    view! {
                        <input
                            type=input_type
                            min=field.is_numeric().then_some("0")
                            step=(field != ItemField::Quantity && field.is_numeric()).then_some("0.01")
                            prop:value=value
                            on:input=on_input
                        />
                    }.into_any()
                };
                view! {
                    <label class="form-field">
                        <span class="form-label">
                            {field.label()}
                            {field.is_required().then_some(" *")}
                        </span>
                        {input}
                        {error_for(field.label())}
                    </label>
                }
            }).collect_view()}
        </div>

        <div class="tag-groups">
            {TagGroup::ALL.into_iter().map(|group| view! { <TagSelector group=group draft=draft /> }).collect_view()}
        </div>

        <ImagePicker draft=draft />
        {error_for("Images")}
    }
}
