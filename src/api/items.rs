//! Item Endpoints

use serde::Deserialize;

use super::{Ack, ApiClient, ApiResult, MultipartPayload};
use crate::models::Item;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemsPayload {
    #[serde(default)]
    all_items: Vec<Item>,
}

impl ApiClient {
    /// `GET /all-shoes`
    pub async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let envelope = self.get::<ItemsPayload>("all-shoes").await?;
        tracing::debug!(count = envelope.payload.all_items.len(), "items loaded");
        Ok(envelope.payload.all_items)
    }

    /// `POST /add-shoe` (multipart); returns the backend message
    pub async fn create_item(&self, payload: MultipartPayload) -> ApiResult<Option<String>> {
        let request = self.http().post(self.url("add-shoe")).multipart(payload.into_form()?);
        Ok(self.send::<Ack>(request).await?.message)
    }

    /// `PUT /update-shoe/{id}` (multipart, changed fields only)
    pub async fn update_item(&self, id: &str, payload: MultipartPayload) -> ApiResult<Option<String>> {
        let path = format!("update-shoe/{}", Self::segment(id));
        tracing::debug!(id, fields = ?payload.names(), "updating item");
        let request = self.http().put(self.url(&path)).multipart(payload.into_form()?);
        Ok(self.send::<Ack>(request).await?.message)
    }

    /// `DELETE /delete-shoe/{id}`
    pub async fn delete_item(&self, id: &str) -> ApiResult<Option<String>> {
        let path = format!("delete-shoe/{}", Self::segment(id));
        let request = self.http().delete(self.url(&path));
        Ok(self.send::<Ack>(request).await?.message)
    }
}
