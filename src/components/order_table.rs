//! Order Table Component
//!
//! One row per order with a status selector and view/print actions.

use leptos::prelude::*;

use crate::filters::{format_money, to_usd};
use crate::models::{Order, OrderStatus};

#[component]
pub fn OrderTable(
    #[prop(into)] orders: Signal<Vec<Order>>,
    #[prop(into)] rate: Signal<f64>,
    #[prop(into)] on_status: Callback<(String, OrderStatus)>,
    #[prop(into)] on_view: Callback<Order>,
    #[prop(into)] on_print: Callback<Order>,
) -> impl IntoView {
    view! {
        <Show
            when=move || orders.with(|o| !o.is_empty())
            fallback=|| view! { <p class="empty-state">"No orders found."</p> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Date"</th>
                        <th class="num">"Total"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| (order.id.clone(), order.status)
                        children=move |order| {
                            let id = order.id.clone();
                            let current = order.status;
                            let total = order.total;
                            let usd = move || {
                                to_usd(total, rate.get())
                                    .map(|usd| format!("≈ USD {}", format_money(usd)))
                                    .unwrap_or_default()
                            };
                            let view_order = order.clone();
                            let print_order = order.clone();
                            view! {
                                <tr>
                                    <td>{order.id.clone()}</td>
                                    <td>{order.customer_name.clone()}</td>
                                    <td>{order.created_at.format("%Y-%m-%d").to_string()}</td>
                                    <td class="num">
                                        {format!("GHS {}", format_money(order.total))}
                                        <div class="sub">{usd}</div>
                                    </td>
                                    <td>
                                        <select
                                            class=format!("status-select status-{}", current.as_str())
                                            on:change=move |ev| {
                                                if let Ok(status) = event_target_value(&ev).parse::<OrderStatus>() {
                                                    if status != current {
                                                        on_status.run((id.clone(), status));
                                                    }
                                                }
                                            }
                                        >
                                            {OrderStatus::ALL.into_iter().map(|status| view! {
                                                <option value=status.as_str() selected={status == current}>
                                                    {status.label()}
                                                </option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="row-actions">
                                        <button type="button" on:click=move |_| on_view.run(view_order.clone())>"View"</button>
                                        <button type="button" on:click=move |_| on_print.run(print_order.clone())>"Print"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
