//! Line Chart Component
//!
//! SVG rendering of the month-by-month earnings series.

use leptos::prelude::*;

use crate::chart;
use crate::filters::format_money;
use crate::models::MonthlyEarning;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PADDING: f64 = 32.0;

#[component]
pub fn LineChart(#[prop(into)] series: Signal<Vec<MonthlyEarning>>, #[prop(into)] months: Signal<usize>) -> impl IntoView {
    let points = Memo::new(move |_| {
        series.with(|s| chart::plot(chart::window(s, months.get()), WIDTH, HEIGHT, PADDING))
    });
    let baseline = (HEIGHT - PADDING).to_string();
    let label_y = (HEIGHT - PADDING / 3.0).to_string();

    view! {
        <Show
            when=move || points.with(|p| !p.is_empty())
            fallback=|| view! { <p class="empty-state">"No earnings recorded yet."</p> }
        >
            <svg class="line-chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                <line
                    class="axis"
                    x1=PADDING.to_string()
                    y1=baseline.clone()
                    x2=(WIDTH - PADDING).to_string()
                    y2=baseline.clone()
                />
                <polyline class="series" fill="none" points=move || points.with(|p| chart::polyline(p)) />
                {
                    let label_y = label_y.clone();
                    move || points.get().into_iter().map(|p| {
                        let x = p.x.to_string();
                        view! {
                            <g class="point" data-value=format!("GHS {}", format_money(p.value))>
                                <circle cx=x.clone() cy=p.y.to_string() r="4" />
                                <text x=x y=label_y.clone() text-anchor="middle">{p.label}</text>
                            </g>
                        }
                    }).collect_view()
                }
            </svg>
        </Show>
    }
}
