//! Client tests against an in-process backend that records what it receives.

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::*;
use crate::config::AppConfig;
use crate::models::OrderStatus;
use crate::upload::UploadImage;

#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
    fields: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn fields(&self) -> Vec<String> {
        self.fields.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn record_fields(&self, mut multipart: Multipart) {
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let _ = field.bytes().await.unwrap();
            self.fields.lock().unwrap().push(name);
        }
    }
}

async fn all_shoes(State(rec): State<Recorder>) -> Json<Value> {
    rec.record("GET all-shoes".to_string());
    Json(json!({
        "success": true,
        "allItems": [
            { "_id": "a1", "name": "Air Max", "gender": "Men", "images": "https://cdn/a1.png" },
            { "_id": "a2", "name": "Boot", "Gender": ["Womens"], "images": ["u1", "u2"] }
        ]
    }))
}

async fn add_shoe(State(rec): State<Recorder>, multipart: Multipart) -> Json<Value> {
    rec.record("POST add-shoe".to_string());
    rec.record_fields(multipart).await;
    Json(json!({ "success": false, "message": "Duplicate SKU" }))
}

async fn update_shoe(State(rec): State<Recorder>, Path(id): Path<String>, multipart: Multipart) -> Json<Value> {
    rec.record(format!("PUT update-shoe/{}", id));
    rec.record_fields(multipart).await;
    Json(json!({ "success": true }))
}

async fn delete_shoe(State(rec): State<Recorder>, Path(id): Path<String>) -> Json<Value> {
    rec.record(format!("DELETE delete-shoe/{}", id));
    Json(json!({ "success": true, "message": "Item deleted" }))
}

async fn update_status(State(rec): State<Recorder>, Path((id, status)): Path<(String, String)>) -> Json<Value> {
    rec.record(format!("PUT update-order-status/{}/{}", id, status));
    Json(json!({ "success": true }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "success": false, "message": "db down" })))
}

async fn exchange_rate() -> Json<Value> {
    Json(json!({ "rate": 15.25 }))
}

fn routes(rec: Recorder) -> Router {
    let api = Router::new()
        .route("/all-shoes", get(all_shoes))
        .route("/add-shoe", post(add_shoe))
        .route("/update-shoe/:id", put(update_shoe))
        .route("/delete-shoe/:id", delete(delete_shoe))
        .route("/update-order-status/:id/:status", put(update_status))
        .route("/conversion-rate", get(broken))
        .route("/exchange-rate", get(exchange_rate))
        .route("/all-orders", get(broken))
        .with_state(rec);
    Router::new().nest("/api/v1", api)
}

/// Serve `router` on an ephemeral port; returns the API base URL
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

async fn client_with_recorder() -> (ApiClient, Recorder) {
    let rec = Recorder::default();
    let base = serve(routes(rec.clone())).await;
    let config = AppConfig::default()
        .with_api_base(base.clone())
        .with_rate_api(format!("{}/no-such-table", base));
    (ApiClient::new(config), rec)
}

#[tokio::test]
async fn test_list_items_decodes_every_item() {
    let (client, rec) = client_with_recorder().await;

    let items = client.list_items().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "a1");
    assert_eq!(items[0].images, vec!["https://cdn/a1.png".to_string()]);
    assert!(items[1].gender.contains("Womens"));
    assert_eq!(rec.calls(), vec!["GET all-shoes"]);
}

#[tokio::test]
async fn test_delete_issues_exactly_one_call_with_id() {
    let (client, rec) = client_with_recorder().await;

    let message = client.delete_item("a2").await.unwrap();

    assert_eq!(message.as_deref(), Some("Item deleted"));
    assert_eq!(rec.calls(), vec!["DELETE delete-shoe/a2"]);
}

#[tokio::test]
async fn test_create_rejection_carries_backend_message() {
    let (client, rec) = client_with_recorder().await;
    let mut payload = MultipartPayload::new();
    payload
        .text("name", "Air Max")
        .text("itemNumber", "SKU-001")
        .file("images", UploadImage::from_bytes("a.png", "image/png", vec![137, 80, 78, 71]));

    let err = client.create_item(payload).await.unwrap_err();

    assert_eq!(err.user_message("Failed to add item."), "Duplicate SKU");
    assert_eq!(rec.calls(), vec!["POST add-shoe"]);
    assert_eq!(rec.fields(), vec!["name", "itemNumber", "images"]);
}

#[tokio::test]
async fn test_update_sends_only_given_fields() {
    let (client, rec) = client_with_recorder().await;
    let mut payload = MultipartPayload::new();
    payload.text("quantity", "9");

    client.update_item("a1", payload).await.unwrap();

    assert_eq!(rec.calls(), vec!["PUT update-shoe/a1"]);
    assert_eq!(rec.fields(), vec!["quantity"]);
}

#[tokio::test]
async fn test_update_order_status_path() {
    let (client, rec) = client_with_recorder().await;

    client.update_order_status("o-7", OrderStatus::Cancelled).await.unwrap();

    assert_eq!(rec.calls(), vec!["PUT update-order-status/o-7/cancelled"]);
}

#[tokio::test]
async fn test_http_error_keeps_backend_message() {
    let (client, _rec) = client_with_recorder().await;

    let err = client.list_orders().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(err.user_message("Failed to load orders."), "db down");
}

#[tokio::test]
async fn test_conversion_rate_falls_back_to_exchange_rate() {
    let (client, _rec) = client_with_recorder().await;

    assert_eq!(client.conversion_rate().await, 15.25);
    // public table is missing, so the backend chain answers
    assert_eq!(client.public_exchange_rate().await, 15.25);
}

#[tokio::test]
async fn test_conversion_rate_defaults_when_backend_unreachable() {
    let base = serve(Router::new()).await;
    let client = ApiClient::new(AppConfig::default().with_api_base(base));

    assert_eq!(client.conversion_rate().await, client.config().fallback_rate);
}
