//! Orders Page
//!
//! Full order list with month filter, headline buckets, status updates and
//! invoice printing.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::degrade;
use crate::cancel::RequestScope;
use crate::components::{OrderDetails, OrderTable, StatCard};
use crate::context::use_app;
use crate::filters::{self, format_money, MONTH_NAMES};
use crate::invoice;
use crate::models::{EarningsSummary, Order, OrderStatus};
use crate::store::{
    store_orders, store_orders_loading, store_orders_rate, store_patch_order_status, store_set_orders,
    store_set_orders_rate, OrdersState,
};

/// The month-filtered table plus the today/this-week buckets. Buckets are
/// taken over every order, whatever month is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct OrderBuckets {
    pub filtered: Vec<Order>,
    pub today: Vec<Order>,
    pub this_week: Vec<Order>,
}

pub(crate) fn bucket_orders(orders: &[Order], month: Option<u32>, now: DateTime<Utc>) -> OrderBuckets {
    OrderBuckets {
        filtered: filters::filter_by_month(orders, month, &Utc),
        today: filters::orders_since(orders, filters::start_of_day(now, &Utc)),
        this_week: filters::orders_since(orders, filters::start_of_week(now)),
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app();
    let scope = RequestScope::for_component();
    let store = Store::new(OrdersState {
        loading: true,
        rate: ctx.api.config().fallback_rate,
        ..Default::default()
    });

    let (daily, set_daily) = signal(EarningsSummary::default());
    let (monthly, set_monthly) = signal(EarningsSummary::default());
    let (weekly, set_weekly) = signal(EarningsSummary::default());
    let (month_filter, set_month_filter) = signal::<Option<u32>>(None);
    let (viewing, set_viewing) = signal::<Option<Order>>(None);

    // Load on mount
    let load_api = ctx.api.clone();
    let load_scope = scope.clone();
    Effect::new(move |_| {
        let api = load_api.clone();
        let s = load_scope.clone();
        spawn_local(async move {
            if let Some(orders) = degrade("orders", s.run(api.list_orders()).await) {
                tracing::info!(count = orders.len(), "orders loaded");
                store_set_orders(&store, orders);
            }
        });

        let api = load_api.clone();
        let s = load_scope.clone();
        spawn_local(async move {
            if let Some(rate) = s.run_infallible(api.public_exchange_rate()).await {
                store_set_orders_rate(&store, rate);
            }
        });

        for (what, setter) in [("daily", set_daily), ("monthly", set_monthly), ("weekly", set_weekly)] {
            let api = load_api.clone();
            let s = load_scope.clone();
            spawn_local(async move {
                let result = match what {
                    "daily" => s.run(api.daily_summary()).await,
                    "monthly" => s.run(api.monthly_summary()).await,
                    _ => s.run(api.weekly_summary()).await,
                };
                if let Some(summary) = degrade(what, result) {
                    setter.set(summary);
                }
            });
        }
    });

    let all_orders = Signal::derive(move || store_orders(&store));
    let rate = Signal::derive(move || store_orders_rate(&store));
    let buckets = Memo::new(move |_| {
        all_orders.with(|orders| bucket_orders(orders, month_filter.get(), Utc::now()))
    });
    let filtered = Memo::new(move |_| buckets.with(|b| b.filtered.clone()));
    let today = Memo::new(move |_| buckets.with(|b| b.today.clone()));
    let this_week = Memo::new(move |_| buckets.with(|b| b.this_week.clone()));

    let toasts = ctx.toasts;
    let api = ctx.api.clone();
    let on_status = Callback::new(move |(id, status): (String, OrderStatus)| {
        store_patch_order_status(&store, &id, status);
        let api = api.clone();
        let scope = scope.clone();
        spawn_local(async move {
            match scope.run(api.update_order_status(&id, status)).await {
                Ok(_) => tracing::info!(order = %id, status = %status, "order status updated"),
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    tracing::error!(order = %id, error = %e, "order status update failed");
                    toasts.error(e.user_message("Failed to update order status."));
                }
            }
        });
    });

    let on_print = Callback::new(move |order: Order| {
        let html = invoice::render_invoice(&order, store_orders_rate(&store));
        if let Err(e) = invoice::print_html(&html) {
            tracing::warn!(order = %order.id, error = %e, "invoice print failed");
            toasts.error("Could not open the print window. Allow pop-ups and try again.");
        }
    });

    let money = |orders: Memo<Vec<Order>>| Signal::derive(move || format!("GHS {}", orders.with(|o| format_money(filters::revenue(o)))));
    let summary_money = |summary: ReadSignal<EarningsSummary>| {
        Signal::derive(move || format!("GHS {}", format_money(summary.get().earnings)))
    };
    let summary_count = |summary: ReadSignal<EarningsSummary>| {
        Signal::derive(move || format!("{} orders", summary.get().orders))
    };
    let loading = Signal::derive(move || store_orders_loading(&store));

    view! {
        <section class="page orders-page">
            <header class="page-header">
                <h1>"Orders"</h1>
                <select
                    class="month-select"
                    on:change=move |ev| set_month_filter.set(filters::parse_month(&event_target_value(&ev)))
                >
                    <option value="all" selected=true>"All months"</option>
                    {MONTH_NAMES.iter().enumerate().map(|(index, name)| view! {
                        <option value=index.to_string()>{*name}</option>
                    }).collect_view()}
                </select>
            </header>

            <div class="stat-grid">
                <StatCard
                    title="Today"
                    value=money(today)
                    caption=Signal::derive(move || format!("{} orders", today.with(|o| o.len())))
                    loading=loading
                />
                <StatCard
                    title="This week"
                    value=money(this_week)
                    caption=Signal::derive(move || format!("{} orders", this_week.with(|o| o.len())))
                    loading=loading
                />
                <StatCard
                    title="Filtered revenue"
                    value=money(filtered)
                    caption=Signal::derive(move || {
                        filtered.with(|o| format!("{} of {} completed", filters::completed_count(o), o.len()))
                    })
                    loading=loading
                />
            </div>

            <div class="stat-grid secondary">
                <StatCard title="Daily (reported)" value=summary_money(daily) caption=summary_count(daily) />
                <StatCard title="Weekly (reported)" value=summary_money(weekly) caption=summary_count(weekly) />
                <StatCard title="Monthly (reported)" value=summary_money(monthly) caption=summary_count(monthly) />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading orders..."</p> }
            >
                <OrderTable
                    orders=filtered
                    rate=rate
                    on_status=on_status
                    on_view=move |order: Order| set_viewing.set(Some(order))
                    on_print=on_print
                />
            </Show>

            {move || viewing.get().map(|order| view! {
                <OrderDetails order=order rate=rate.get_untracked() on_close=move |_| set_viewing.set(None) />
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, date: &str, total: f64) -> Order {
        Order {
            id: id.to_string(),
            customer_name: String::new(),
            phone_number: String::new(),
            items: Vec::new(),
            total,
            location: None,
            delivery_method: None,
            status: OrderStatus::Completed,
            created_at: date.parse().unwrap(),
        }
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_buckets_ignore_month_filter() {
        let orders = vec![
            order("today", "2025-10-29T09:30:00Z", 180.0),
            order("march", "2025-03-12T10:00:00Z", 90.0),
        ];
        let now: DateTime<Utc> = "2025-10-29T15:00:00Z".parse().unwrap();

        let march = bucket_orders(&orders, Some(2), now);
        assert_eq!(ids(&march.filtered), vec!["march"]);
        assert_eq!(ids(&march.today), vec!["today"]);
        assert_eq!(ids(&march.this_week), vec!["today"]);
        assert_eq!(filters::revenue(&march.today), 180.0);

        let all = bucket_orders(&orders, None, now);
        assert_eq!(all.filtered.len(), 2);
        assert_eq!(all.today, march.today);
    }
}
