//! List Filters
//!
//! Pure predicates and reductions over the in-memory order and item lists,
//! recomputed on every render.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::models::{Item, Order, OrderStatus};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse the month selector value: "all" or a 0-based month index
pub fn parse_month(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|m| *m < 12)
}

/// Orders created in calendar month `month` (0 = January) of `tz`; `None` keeps all
pub fn filter_by_month<Tz: TimeZone>(orders: &[Order], month: Option<u32>, tz: &Tz) -> Vec<Order> {
    match month {
        None => orders.to_vec(),
        Some(month) => orders
            .iter()
            .filter(|order| order.created_at.with_timezone(tz).month0() == month)
            .cloned()
            .collect(),
    }
}

/// Orders created at or after `start`
pub fn orders_since(orders: &[Order], start: DateTime<Utc>) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.created_at >= start)
        .cloned()
        .collect()
}

/// Midnight of `now`'s calendar day in `tz`
pub fn start_of_day<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    let local = now.with_timezone(tz);
    local
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
        .map(|midnight| midnight.with_timezone(&Utc))
        .unwrap_or(now)
}

/// Trailing seven-day window
pub fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(7)
}

pub fn revenue(orders: &[Order]) -> f64 {
    orders.iter().map(|order| order.total).sum()
}

pub fn completed_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .count()
}

/// Set the status of order `id` in place; false when it is not in the list
pub fn patch_status(orders: &mut [Order], id: &str, status: OrderStatus) -> bool {
    match orders.iter_mut().find(|order| order.id == id) {
        Some(order) => {
            order.status = status;
            true
        }
        None => false,
    }
}

/// Drop repeated ids, keeping the first occurrence
pub fn unique_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

/// Remove item `id`; false when nothing matched
pub fn remove_by_id(items: &mut Vec<Item>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Local currency amount in USD
pub fn to_usd(amount: f64, rate: f64) -> Option<f64> {
    (rate.is_finite() && rate > 0.0).then(|| amount / rate)
}

/// `1234.5` → `"1,234.50"`
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}
