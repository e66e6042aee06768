//! All Items Page
//!
//! Inventory table with inline delete and an edit dialog that sends only the
//! fields that changed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiClient, ApiResult};
use crate::cancel::RequestScope;
use crate::components::{DeleteConfirmButton, ItemFormFields};
use crate::context::use_app;
use crate::filters::{format_money, to_usd};
use crate::form::{DraftMode, FieldError, ItemDraft};
use crate::models::Item;
use crate::toast::{Toast, Toasts};
use crate::store::{
    store_inventory_loading, store_inventory_rate, store_item_count, store_items, store_remove_item,
    store_set_inventory_rate, store_set_items, InventoryState, InventoryStore,
};

fn tag_list(item: &Item) -> String {
    item.gender
        .iter()
        .chain(&item.types)
        .chain(&item.shoe_status)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Items to show after a load, plus a toast when it failed; `None` when cancelled
pub(crate) fn settle_items(result: ApiResult<Vec<Item>>) -> Option<(Vec<Item>, Option<Toast>)> {
    match result {
        Ok(items) => {
            tracing::info!(count = items.len(), "items loaded");
            Some((items, None))
        }
        Err(e) if e.is_cancelled() => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load items");
            Some((Vec::new(), Some(Toast::error(e.user_message("Failed to load items.")))))
        }
    }
}

/// Fetch the whole list into the store
fn load_items(api: ApiClient, scope: RequestScope, store: InventoryStore, toasts: Toasts) {
    spawn_local(async move {
        if let Some((items, toast)) = settle_items(scope.run(api.list_items()).await) {
            store_set_items(&store, items);
            if let Some(toast) = toast {
                toasts.push(toast);
            }
        }
    });
}

#[component]
pub fn AllItemsPage() -> impl IntoView {
    let ctx = use_app();
    let scope = RequestScope::for_component();
    let store = Store::new(InventoryState {
        loading: true,
        rate: ctx.api.config().fallback_rate,
        ..Default::default()
    });
    let toasts = ctx.toasts;

    // Load on mount
    let load_api = ctx.api.clone();
    let load_scope = scope.clone();
    Effect::new(move |_| {
        load_items(load_api.clone(), load_scope.clone(), store, toasts);

        let api = load_api.clone();
        let s = load_scope.clone();
        spawn_local(async move {
            if let Some(rate) = s.run_infallible(api.conversion_rate()).await {
                store_set_inventory_rate(&store, rate);
            }
        });
    });

    // Delete
    let (deleting, set_deleting) = signal::<Option<String>>(None);
    let delete_api = ctx.api.clone();
    let delete_scope = scope.clone();
    let delete = Callback::new(move |id: String| {
        set_deleting.set(Some(id.clone()));
        let api = delete_api.clone();
        let scope = delete_scope.clone();
        spawn_local(async move {
            match scope.run(api.delete_item(&id)).await {
                Ok(_) => {
                    store_remove_item(&store, &id);
                    tracing::info!(item = %id, "item deleted");
                    toasts.success("Deleted", "Item removed from inventory.");
                }
                Err(e) if e.is_cancelled() => return,
                Err(e) => {
                    tracing::error!(item = %id, error = %e, "delete failed");
                    toasts.error(e.user_message("Failed to delete item."));
                }
            }
            set_deleting.set(None);
        });
    });

    // Edit
    let editing = RwSignal::new(None::<Item>);
    let draft = RwSignal::new(ItemDraft::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (saving, set_saving) = signal(false);

    let open_editor = move |item: Item| {
        draft.set(ItemDraft::from_item(&item));
        errors.set(Vec::new());
        editing.set(Some(item));
    };
    let close_editor = move || {
        editing.set(None);
        set_saving.set(false);
    };

    let save_api = ctx.api.clone();
    let save_scope = scope.clone();
    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(original) = editing.get_untracked() else { return };
        let valid = match draft.with_untracked(|d| d.validate(DraftMode::Edit)) {
            Ok(valid) => valid,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());

        let payload = valid.diff(&original);
        if payload.is_empty() {
            toasts.success("No changes", "Nothing to update.");
            close_editor();
            return;
        }

        set_saving.set(true);
        let api = save_api.clone();
        let scope = save_scope.clone();
        spawn_local(async move {
            let result = scope.run(api.update_item(&original.id, payload)).await;
            match result {
                Ok(_) => {
                    tracing::info!(item = %original.id, "item updated");
                    toasts.success("Updated", "Item details saved.");
                    close_editor();
                    load_items(api, scope, store, toasts);
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    tracing::error!(item = %original.id, error = %e, "update failed");
                    toasts.error(e.user_message("Failed to update item."));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <section class="page all-items-page">
            <header class="page-header">
                <h1>"All Items"</h1>
                <span class="count">{move || format!("{} items", store_item_count(&store))}</span>
            </header>

            <Show
                when=move || !store_inventory_loading(&store)
                fallback=|| view! { <p class="loading">"Loading items..."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Name"</th>
                            <th>"Item #"</th>
                            <th>"Tags"</th>
                            <th class="num">"Qty"</th>
                            <th class="num">"Price"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store_items(&store)
                            key=|item| item.id.clone()
                            children=move |item| {
                                let id = item.id.clone();
                                let busy = Signal::derive({
                                    let id = id.clone();
                                    move || deleting.with(|d| d.as_deref() == Some(id.as_str()))
                                });
                                let retail = item.retail_cost;
                                let usd = move || {
                                    to_usd(retail, store_inventory_rate(&store))
                                        .map(|usd| format!("≈ USD {}", format_money(usd)))
                                        .unwrap_or_default()
                                };
                                let thumbnail = item.primary_image().map(|src| view! {
                                    <img class="row-thumb" src=src.to_string() alt="" />
                                });
                                let tags = tag_list(&item);
                                let edit_item = item.clone();
                                view! {
                                    <tr>
                                        <td>{thumbnail}</td>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.item_number.clone()}</td>
                                        <td class="tags">{tags}</td>
                                        <td class="num">{item.quantity}</td>
                                        <td class="num">
                                            {format!("GHS {}", format_money(item.retail_cost))}
                                            <div class="sub">{usd}</div>
                                        </td>
                                        <td class="row-actions">
                                            <button type="button" on:click=move |_| open_editor(edit_item.clone())>
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                busy=busy
                                                on_confirm=move |_| delete.run(id.clone())
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=move || editing.with(|e| e.is_some())>
                <div class="modal-backdrop">
                    <form class="modal item-form" role="dialog" on:submit=save.clone()>
                        <header class="modal-header">
                            <h2>"Edit Item"</h2>
                            <button type="button" class="modal-close" on:click=move |_| close_editor()>"×"</button>
                        </header>
                        <ItemFormFields draft=draft errors=errors />
                        <div class="form-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| close_editor()>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::toast::ToastVariant;
    use std::collections::BTreeSet;

    #[test]
    fn test_failed_load_shows_error_toast() {
        let (items, toast) = settle_items(Err(ApiError::Status { status: 500, message: None })).unwrap();
        assert!(items.is_empty());
        let toast = toast.unwrap();
        assert_eq!(toast.description, "Failed to load items.");
        assert_eq!(toast.variant, ToastVariant::Destructive);

        let (_, toast) = settle_items(Err(ApiError::Rejected("db down".to_string()))).unwrap();
        assert_eq!(toast.unwrap().description, "db down");
    }

    #[test]
    fn test_loaded_items_pass_through_quietly() {
        let (items, toast) = settle_items(Ok(Vec::new())).unwrap();
        assert!(items.is_empty());
        assert!(toast.is_none());
        assert!(settle_items(Err(ApiError::Cancelled)).is_none());
    }

    #[test]
    fn test_tag_list_joins_all_groups() {
        let item = Item {
            id: "a1".to_string(),
            name: "Air Max".to_string(),
            description: String::new(),
            item_number: String::new(),
            gender: BTreeSet::from(["Men".to_string()]),
            types: BTreeSet::from(["Sneakers".to_string()]),
            shoe_status: BTreeSet::from(["Brand New".to_string()]),
            quantity: 1,
            cost: 0.0,
            retail_cost: 0.0,
            size: String::new(),
            american_size: String::new(),
            ghanaian_size: String::new(),
            images: Vec::new(),
            created_at: None,
        };
        assert_eq!(tag_list(&item), "Men, Sneakers, Brand New");
    }
}
