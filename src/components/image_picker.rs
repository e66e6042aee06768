//! Image Picker Component
//!
//! File input with thumbnails of kept images and newly picked uploads.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::form::ItemDraft;
use crate::toast::use_toasts;
use crate::upload;

#[component]
pub fn ImagePicker(draft: RwSignal<ItemDraft>) -> impl IntoView {
    let toasts = use_toasts();
    let (reading, set_reading) = signal(false);

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else { return };
        if files.length() == 0 {
            return;
        }
        set_reading.set(true);
        spawn_local(async move {
            match upload::read_files(files).await {
                Ok(images) => {
                    tracing::debug!(count = images.len(), "images picked");
                    draft.try_update(|d| d.add_uploads(images));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "image read failed");
                    toasts.error(e.user_message("Could not read the selected images."));
                }
            }
            // allow picking the same file again
            input.set_value("");
            set_reading.try_set(false);
        });
    };

    view! {
        <div class="image-picker">
            <label class="form-label">"Images"</label>
            <input type="file" accept="image/*" multiple=true on:change=on_change />
            <Show when=move || reading.get()>
                <span class="hint">"Reading files..."</span>
            </Show>
            <div class="thumbnails">
                {move || draft.with(|d| d.images.clone()).into_iter().enumerate().map(|(index, url)| {
                    view! {
                        <div class="thumbnail">
                            <img src=url alt="Item image" />
                            <button
                                type="button"
                                class="thumb-remove"
                                on:click=move |_| draft.update(|d| d.remove_image(index))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }).collect_view()}
                {move || draft.with(|d| {
                    d.uploads.iter().map(|u| (u.name.clone(), u.preview.clone())).collect::<Vec<_>>()
                }).into_iter().enumerate().map(|(index, (name, preview))| {
                    view! {
                        <div class="thumbnail new">
                            <img src=preview alt=name />
                            <button
                                type="button"
                                class="thumb-remove"
                                on:click=move |_| draft.update(|d| d.remove_upload(index))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
