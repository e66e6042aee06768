//! Invoice Printing
//!
//! Renders an order as a standalone HTML page and hands it to the browser's
//! print dialog in a new window.

use std::fmt::Write as _;

use crate::filters::{format_money, to_usd};
use crate::models::Order;

const SHOP_NAME: &str = "Shoe Admin";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full HTML document for one order; `rate` is local units per USD
pub fn render_invoice(order: &Order, rate: f64) -> String {
    let mut rows = String::new();
    for line in &order.items {
        let name = if line.name.is_empty() { &line.item } else { &line.name };
        let _ = write!(
            rows,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">GHS {}</td><td class=\"num\">GHS {}</td></tr>",
            escape_html(name),
            line.quantity,
            format_money(line.price),
            format_money(line.subtotal()),
        );
    }

    let mut details = format!(
        "<p><strong>Customer:</strong> {}</p><p><strong>Phone:</strong> {}</p>",
        escape_html(&order.customer_name),
        escape_html(&order.phone_number),
    );
    if let Some(location) = order.location.as_deref().filter(|l| !l.is_empty()) {
        let _ = write!(details, "<p><strong>Location:</strong> {}</p>", escape_html(location));
    }
    if let Some(method) = order.delivery_method {
        let _ = write!(details, "<p><strong>Fulfillment:</strong> {}</p>", method.label());
    }
    let _ = write!(
        details,
        "<p><strong>Status:</strong> {}</p><p><strong>Date:</strong> {}</p>",
        order.status.label(),
        order.created_at.format("%Y-%m-%d %H:%M"),
    );

    let usd = to_usd(order.total, rate)
        .map(|usd| format!("<p class=\"usd\">≈ USD {}</p>", format_money(usd)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Invoice {id}</title>\
<style>body{{font-family:sans-serif;margin:32px}}table{{width:100%;border-collapse:collapse}}\
th,td{{border-bottom:1px solid #ddd;padding:6px;text-align:left}}.num{{text-align:right}}\
.total{{font-size:1.2em;font-weight:bold;text-align:right}}</style></head><body>\
<h1>{shop}</h1><h2>Invoice {id}</h2>{details}\
<table><thead><tr><th>Item</th><th class=\"num\">Qty</th><th class=\"num\">Unit</th><th class=\"num\">Subtotal</th></tr></thead>\
<tbody>{rows}</tbody></table><p class=\"total\">Total: GHS {total}</p>{usd}</body></html>",
        id = escape_html(&order.id),
        shop = SHOP_NAME,
        details = details,
        rows = rows,
        total = format_money(order.total),
        usd = usd,
    )
}

/// Open `html` in a new window and trigger the print dialog
pub fn print_html(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("{:?}", e))?
        .ok_or("popup blocked")?;
    let root = popup
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or("popup has no document")?;
    root.set_inner_html(html);
    let _ = popup.focus();
    popup.print().map_err(|e| format!("{:?}", e))
}
