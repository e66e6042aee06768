//! Frontend Models
//!
//! Data structures matching backend entities.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Gender tag options
pub const GENDER_OPTIONS: &[&str] = &["Men", "Womens", "Unisex", "Children", "Teen"];

/// Shoe type tag options
pub const TYPE_OPTIONS: &[&str] = &["Sneakers", "Dress", "Sandals", "Boots"];

/// Condition tag options
pub const CONDITION_OPTIONS: &[&str] = &["Brand New", "Slightly Used", "Used"];

/// Inventory item (matches backend `shoe` documents)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub item_number: String,
    #[serde(rename = "Gender", alias = "gender", default, deserialize_with = "one_or_many")]
    pub gender: BTreeSet<String>,
    #[serde(rename = "type", default, deserialize_with = "one_or_many")]
    pub types: BTreeSet<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub shoe_status: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub cost: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub retail_cost: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub size: String,
    #[serde(alias = "AmericanSize", default, deserialize_with = "null_default")]
    pub american_size: String,
    #[serde(rename = "GhanaianSize", default, deserialize_with = "null_default")]
    pub ghanaian_size: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Item {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Order status (single canonical set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire value, also used in the status-update path
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown order status: {}", s))
    }
}

/// Unknown or missing values decode as `Pending` so one odd order cannot
/// empty the whole list
impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(raw.parse().unwrap_or_else(|_| {
            tracing::warn!(status = %raw, "unknown order status, treating as pending");
            OrderStatus::Pending
        }))
    }
}

/// How an order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    Pickup,
    Delivery,
}

impl Fulfillment {
    pub fn label(self) -> &'static str {
        match self {
            Fulfillment::Pickup => "Pickup",
            Fulfillment::Delivery => "Delivery",
        }
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(alias = "shoeId", alias = "itemId", default, deserialize_with = "null_default")]
    pub item: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Customer order (created externally, status mutated here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub customer_name: String,
    #[serde(alias = "phone", default, deserialize_with = "null_default")]
    pub phone_number: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(alias = "totalAmount", default, deserialize_with = "null_default")]
    pub total: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(alias = "fulfillment", default)]
    pub delivery_method: Option<Fulfillment>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
}

/// Earnings and order count over one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    #[serde(alias = "totalEarnings", default, deserialize_with = "null_default")]
    pub earnings: f64,
    #[serde(alias = "totalOrders", alias = "orderCount", default, deserialize_with = "null_default")]
    pub orders: u32,
}

/// One point of the month-by-month series
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyEarning {
    pub month: String,
    #[serde(alias = "total", default, deserialize_with = "null_default")]
    pub earnings: f64,
}

// ========================
// Tolerant Decoding
// ========================

/// `null` decodes to the type's default
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<String>),
    One(String),
}

/// Accepts a string, an array of strings, a JSON-encoded array string, or null
fn one_or_many<'de, D, C>(deserializer: D) -> Result<C, D::Error>
where
    D: Deserializer<'de>,
    C: FromIterator<String>,
{
    let values = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::Many(values)) => values,
        Some(OneOrMany::One(value)) if value.trim_start().starts_with('[') => {
            serde_json::from_str::<Vec<String>>(&value).unwrap_or_else(|_| vec![value])
        }
        Some(OneOrMany::One(value)) => vec![value],
    };
    Ok(values.into_iter().filter(|v| !v.trim().is_empty()).collect())
}
