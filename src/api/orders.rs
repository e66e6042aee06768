//! Order Endpoints

use serde::Deserialize;

use super::{Ack, ApiClient, ApiResult};
use crate::models::{Order, OrderStatus};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrdersPayload {
    #[serde(alias = "orders", default)]
    all_orders: Vec<Order>,
}

impl ApiClient {
    /// `GET /all-orders`
    pub async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        Ok(self.get::<OrdersPayload>("all-orders").await?.payload.all_orders)
    }

    /// `PUT /update-order-status/{id}/{status}`
    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> ApiResult<Option<String>> {
        let path = format!("update-order-status/{}/{}", Self::segment(id), status.as_str());
        let request = self.http().put(self.url(&path));
        Ok(self.send::<Ack>(request).await?.message)
    }
}
