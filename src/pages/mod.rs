//! Pages
//!
//! One component per sidebar entry, plus the login screen.

mod add_item;
mod all_items;
mod login;
mod orders;
mod revenue;

pub use add_item::AddItemPage;
pub use all_items::AllItemsPage;
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use revenue::RevenuePage;

use crate::api::ApiResult;

/// Outcome of a dashboard read: data on success, the default on failure,
/// nothing when the request was cancelled
pub(crate) fn degrade<T: Default>(what: &str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_cancelled() => None,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load {}", what);
            Some(T::default())
        }
    }
}
