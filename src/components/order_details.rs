//! Order Details Component
//!
//! Modal with the full contents of one order.

use leptos::prelude::*;

use crate::filters::{format_money, to_usd};
use crate::models::Order;

#[component]
pub fn OrderDetails(order: Order, rate: f64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let usd = to_usd(order.total, rate).map(|usd| format!("≈ USD {}", format_money(usd)));
    let location = order.location.clone().filter(|l| !l.is_empty());
    let fulfillment = order.delivery_method.map(|m| m.label());

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h2>"Order " {order.id.clone()}</h2>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <dl class="order-meta">
                    <dt>"Customer"</dt>
                    <dd>{order.customer_name.clone()}</dd>
                    <dt>"Phone"</dt>
                    <dd>{order.phone_number.clone()}</dd>
                    {location.map(|l| view! { <dt>"Location"</dt><dd>{l}</dd> })}
                    {fulfillment.map(|f| view! { <dt>"Fulfillment"</dt><dd>{f}</dd> })}
                    <dt>"Status"</dt>
                    <dd>{order.status.label()}</dd>
                    <dt>"Placed"</dt>
                    <dd>{order.created_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                </dl>
                <table class="order-lines">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th class="num">"Qty"</th>
                            <th class="num">"Unit"</th>
                            <th class="num">"Subtotal"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {order.items.iter().map(|line| {
                            let name = if line.name.is_empty() { line.item.clone() } else { line.name.clone() };
                            view! {
                                <tr>
                                    <td>{name}</td>
                                    <td class="num">{line.quantity}</td>
                                    <td class="num">{format!("GHS {}", format_money(line.price))}</td>
                                    <td class="num">{format!("GHS {}", format_money(line.subtotal()))}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <p class="order-total">{format!("Total: GHS {}", format_money(order.total))}</p>
                {usd.map(|usd| view! { <p class="order-total-usd">{usd}</p> })}
            </div>
        </div>
    }
}
