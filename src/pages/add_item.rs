//! Add Item Page
//!
//! Create form: validates locally, then posts every field and file in one
//! multipart request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiResult;
use crate::cancel::RequestScope;
use crate::components::ItemFormFields;
use crate::context::use_app;
use crate::form::{DraftMode, FieldError, ItemDraft};
use crate::toast::Toast;

/// Apply a create outcome to the draft; `None` when the request was cancelled
pub(crate) fn settle_create(draft: &mut ItemDraft, outcome: ApiResult<Option<String>>) -> Option<Toast> {
    match outcome {
        Ok(_) => {
            draft.reset();
            Some(Toast::success("Success!", "Item has been added to your inventory."))
        }
        Err(e) if e.is_cancelled() => None,
        Err(e) => {
            tracing::error!(error = %e, "create item failed");
            Some(Toast::error(e.user_message("Failed to add item.")))
        }
    }
}

/// Settle against the page's draft signal. A cancelled request, or a page
/// that is already gone, leaves everything untouched.
pub(crate) fn apply_create(draft: RwSignal<ItemDraft>, outcome: ApiResult<Option<String>>) -> Option<Toast> {
    if matches!(&outcome, Err(e) if e.is_cancelled()) {
        return None;
    }
    draft.try_update(|d| settle_create(d, outcome)).flatten()
}

#[component]
pub fn AddItemPage() -> impl IntoView {
    let ctx = use_app();
    let scope = RequestScope::for_component();
    let draft = RwSignal::new(ItemDraft::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (submitting, set_submitting) = signal(false);

    let toasts = ctx.toasts;
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let valid = match draft.with_untracked(|d| d.validate(DraftMode::Create)) {
            Ok(valid) => valid,
            Err(found) => {
                tracing::debug!(count = found.len(), "item form has errors");
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        set_submitting.set(true);

        let api = ctx.api.clone();
        let scope = scope.clone();
        spawn_local(async move {
            let outcome = scope.run(api.create_item(valid.into_create_payload())).await;
            if outcome.is_ok() {
                tracing::info!("item created");
            }
            if let Some(toast) = apply_create(draft, outcome) {
                toasts.push(toast);
                set_submitting.try_set(false);
            }
        });
    };

    view! {
        <section class="page add-item-page">
            <h1>"Add New Item"</h1>
            <form class="item-form" on:submit=submit>
                <ItemFormFields draft=draft errors=errors />
                <div class="form-actions">
                    <button
                        type="button"
                        class="secondary-btn"
                        on:click=move |_| {
                            draft.update(|d| d.reset());
                            errors.set(Vec::new());
                        }
                    >
                        "Clear"
                    </button>
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Adding..." } else { "Add Item" }}
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::form::ItemField;
    use futures::executor::block_on;
    use futures::future::pending;
    use leptos::reactive::owner::Owner;
    use crate::toast::ToastVariant;

    fn filled() -> ItemDraft {
        let mut draft = ItemDraft::default();
        draft.set(ItemField::Name, "Air Max 90");
        draft.set(ItemField::Description, "Classic runner");
        draft.set(ItemField::ItemNumber, "SKU-001");
        draft.set(ItemField::Quantity, "3");
        draft
    }

    #[test]
    fn test_success_resets_draft() {
        let mut draft = filled();
        let toast = settle_create(&mut draft, Ok(Some("created".to_string()))).unwrap();
        assert_eq!(draft, ItemDraft::default());
        assert_eq!(toast.title, "Success!");
        assert_eq!(toast.variant, ToastVariant::Default);
    }

    #[test]
    fn test_rejection_keeps_draft_and_shows_backend_message() {
        let mut draft = filled();
        let toast = settle_create(&mut draft, Err(ApiError::Rejected("Duplicate SKU".to_string()))).unwrap();
        assert_eq!(draft, filled());
        assert_eq!(toast.description, "Duplicate SKU");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut draft = filled();
        let toast = settle_create(&mut draft, Err(ApiError::Rejected(String::new()))).unwrap();
        assert_eq!(toast.description, "Failed to add item.");

        let toast = settle_create(&mut draft, Err(ApiError::Status { status: 502, message: None })).unwrap();
        assert_eq!(toast.description, "Failed to add item.");
        assert_eq!(draft, filled());
    }

    #[test]
    fn test_apply_create_updates_live_draft() {
        let owner = Owner::new();
        let draft = owner.with(|| RwSignal::new(filled()));

        let toast = apply_create(draft, Err(ApiError::Rejected("Duplicate SKU".to_string()))).unwrap();
        assert_eq!(toast.description, "Duplicate SKU");
        assert_eq!(draft.get_untracked(), filled());

        apply_create(draft, Ok(None)).unwrap();
        assert_eq!(draft.get_untracked(), ItemDraft::default());
    }

    #[test]
    fn test_leaving_page_mid_submit_is_harmless() {
        let owner = Owner::new();
        let (scope, draft) = owner.with(|| (RequestScope::for_component(), RwSignal::new(filled())));
        owner.cleanup();

        let outcome = block_on(scope.run(pending::<ApiResult<Option<String>>>()));
        assert!(matches!(outcome, Err(ApiError::Cancelled)));
        assert!(apply_create(draft, outcome).is_none());
        // a response that raced the teardown is dropped too
        assert!(apply_create(draft, Ok(None)).is_none());
    }

    #[test]
    fn test_cancelled_create_changes_nothing() {
        let mut draft = filled();
        assert!(settle_create(&mut draft, Err(ApiError::Cancelled)).is_none());
        assert_eq!(draft, filled());
    }
}
