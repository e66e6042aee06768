//! Page State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each page
//! creates its own store; nothing here is shared across pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filters;
use crate::models::{Item, Order, OrderStatus};

/// Inventory list state of the All Items page
#[derive(Clone, Debug, Default, Store)]
pub struct InventoryState {
    pub items: Vec<Item>,
    pub loading: bool,
    /// Local currency units per USD
    pub rate: f64,
}

pub type InventoryStore = Store<InventoryState>;

/// Order list state of the Orders page
#[derive(Clone, Debug, Default, Store)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub loading: bool,
    pub rate: f64,
}

pub type OrdersStore = Store<OrdersState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the item list, one entry per id
pub fn store_set_items(store: &InventoryStore, items: Vec<Item>) {
    store.items().set(filters::unique_by_id(items));
    store.loading().set(false);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &InventoryStore, item_id: &str) -> bool {
    let mut removed = false;
    store.items().update(|items| removed = filters::remove_by_id(items, item_id));
    removed
}

pub fn store_items(store: &InventoryStore) -> Vec<Item> {
    store.items().get()
}

pub fn store_item_count(store: &InventoryStore) -> usize {
    store.items().with(|items| items.len())
}

pub fn store_inventory_loading(store: &InventoryStore) -> bool {
    store.loading().get()
}

pub fn store_set_inventory_rate(store: &InventoryStore, rate: f64) {
    store.rate().set(rate);
}

pub fn store_inventory_rate(store: &InventoryStore) -> f64 {
    store.rate().get()
}

pub fn store_set_orders(store: &OrdersStore, orders: Vec<Order>) {
    store.orders().set(orders);
    store.loading().set(false);
}

/// Update an order's status in place by ID
pub fn store_patch_order_status(store: &OrdersStore, order_id: &str, status: OrderStatus) {
    store
        .orders()
        .update(|orders| {
            filters::patch_status(orders, order_id, status);
        });
}

pub fn store_orders(store: &OrdersStore) -> Vec<Order> {
    store.orders().get()
}

pub fn store_orders_loading(store: &OrdersStore) -> bool {
    store.loading().get()
}

pub fn store_set_orders_rate(store: &OrdersStore, rate: f64) {
    store.rate().set(rate);
}

pub fn store_orders_rate(store: &OrdersStore) -> f64 {
    store.rate().get()
}
