//! Reports page: trend comparisons and time-series metrics.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::net::reports::{DEFAULT_METRICS_DAYS, fetch_metrics, fetch_trends};
use crate::net::types::{ReportMetrics, TrendsData};

/// Format a percentage change with an explicit sign, e.g. `+12.5%`.
fn format_change(change_percentage: f64) -> String {
    format!("{change_percentage:+.1}%")
}

/// Reports page — trends next to the last month of daily metrics.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let trends = LocalResource::new(|| async { fetch_trends().await.ok() });
    let metrics = LocalResource::new(|| async { fetch_metrics(DEFAULT_METRICS_DAYS).await.ok() });

    view! {
        <MainLayout>
        <section class="reports-page">
            <h1>"Reports"</h1>

            <Suspense fallback=move || view! { <p>"Loading trends..."</p> }>
                {move || {
                    trends
                        .get()
                        .map(|data| match data {
                            Some(data) => view! { <TrendsView data=data/> }.into_any(),
                            None => {
                                view! { <p class="page-error">"Trends are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <p>"Loading metrics..."</p> }>
                {move || {
                    metrics
                        .get()
                        .map(|data| match data {
                            Some(data) => view! { <MetricsView data=data/> }.into_any(),
                            None => {
                                view! { <p class="page-error">"Metrics are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
        </MainLayout>
    }
}

#[component]
fn TrendsView(data: TrendsData) -> impl IntoView {
    let top_users = data.top_users;

    view! {
        <div class="trends">
            <h2>"Trends"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Current"</th>
                        <th>"Previous"</th>
                        <th>"Change"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>"Users"</td>
                        <td>{data.user_trend.current}</td>
                        <td>{data.user_trend.previous}</td>
                        <td>{format_change(data.user_trend.change_percentage)}</td>
                    </tr>
                    <tr>
                        <td>"Items"</td>
                        <td>{data.item_trend.current}</td>
                        <td>{data.item_trend.previous}</td>
                        <td>{format_change(data.item_trend.change_percentage)}</td>
                    </tr>
                </tbody>
            </table>

            <h2>"Top users"</h2>
            <ul class="trends__top-users">
                {top_users
                    .into_iter()
                    .map(|user| {
                        view! {
                            <li>
                                <span>{user.name}</span>
                                <span class="trends__count">{user.items_count}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn MetricsView(data: ReportMetrics) -> impl IntoView {
    let daily = data.daily_metrics.unwrap_or_default();

    view! {
        <div class="metrics">
            <h2>"Daily metrics"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Page views"</th>
                        <th>"Visitors"</th>
                        <th>"Bounce rate"</th>
                        <th>"Conversion"</th>
                    </tr>
                </thead>
                <tbody>
                    {daily
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <tr>
                                    <td>{entry.date}</td>
                                    <td>{entry.data.page_views}</td>
                                    <td>{entry.data.unique_visitors}</td>
                                    <td>{format!("{:.1}%", entry.data.bounce_rate)}</td>
                                    <td>{format!("{:.1}%", entry.data.conversion_rate)}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
