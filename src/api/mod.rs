//! REST API Bindings
//!
//! Typed wrappers over the inventory backend, organized by domain.

mod client;
mod error;
mod items;
mod orders;
mod payload;
mod rates;
mod summary;

#[cfg(test)]
mod tests;

pub use client::{Ack, ApiClient, Envelope};
pub use error::{ApiError, ApiResult};
pub use payload::{FormValue, MultipartPayload};
