//! Revenue Page
//!
//! Today's and this month's earnings plus the month-by-month chart. The three
//! reads are independent; a failed one leaves its card at zero.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::degrade;
use crate::cancel::RequestScope;
use crate::chart::{self, PERIODS};
use crate::components::{LineChart, StatCard};
use crate::context::use_app;
use crate::filters::format_money;
use crate::models::{EarningsSummary, MonthlyEarning};

#[component]
pub fn RevenuePage() -> impl IntoView {
    let ctx = use_app();
    let scope = RequestScope::for_component();

    let (today, set_today) = signal(EarningsSummary::default());
    let (month, set_month) = signal(EarningsSummary::default());
    let (series, set_series) = signal(Vec::<MonthlyEarning>::new());
    let (loading, set_loading) = signal(true);
    let (period, set_period) = signal(12usize);

    // Load on mount
    Effect::new(move |_| {
        let api = ctx.api.clone();
        let s = scope.clone();
        spawn_local(async move {
            if let Some(summary) = degrade("daily earnings", s.run(api.daily_summary()).await) {
                set_today.set(summary);
            }
        });

        let api = ctx.api.clone();
        let s = scope.clone();
        spawn_local(async move {
            if let Some(summary) = degrade("monthly earnings", s.run(api.monthly_summary()).await) {
                set_month.set(summary);
            }
        });

        let api = ctx.api.clone();
        let s = scope.clone();
        spawn_local(async move {
            if let Some(points) = degrade("earnings series", s.run(api.month_by_month()).await) {
                tracing::info!(months = points.len(), "earnings series loaded");
                set_series.set(points);
                set_loading.set(false);
            }
        });
    });

    let money = |summary: ReadSignal<EarningsSummary>| {
        Signal::derive(move || format!("GHS {}", format_money(summary.get().earnings)))
    };
    let count = |summary: ReadSignal<EarningsSummary>| {
        Signal::derive(move || format!("{} orders", summary.get().orders))
    };

    view! {
        <section class="page revenue-page">
            <h1>"Revenue"</h1>
            <div class="stat-grid">
                <StatCard title="Today's earnings" value=money(today) caption=count(today) />
                <StatCard title="This month" value=money(month) caption=count(month) />
                <StatCard
                    title="Period total"
                    value=Signal::derive(move || {
                        series.with(|s| format!("GHS {}", format_money(chart::total(chart::window(s, period.get())))))
                    })
                    caption=Signal::derive(move || format!("Last {} months", period.get()))
                    loading=loading
                />
            </div>

            <div class="chart-card">
                <header class="chart-header">
                    <h2>"Earnings by month"</h2>
                    <select
                        class="period-select"
                        on:change=move |ev| {
                            if let Ok(months) = event_target_value(&ev).parse::<usize>() {
                                set_period.set(months);
                            }
                        }
                    >
                        {PERIODS.into_iter().map(|months| view! {
                            <option value=months.to_string() selected={months == 12}>
                                {format!("Last {} months", months)}
                            </option>
                        }).collect_view()}
                    </select>
                </header>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="loading">"Loading chart..."</p> }
                >
                    <LineChart series=series months=period />
                </Show>
            </div>
        </section>
    }
}
