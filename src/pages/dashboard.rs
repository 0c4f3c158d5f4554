//! Dashboard landing page with account-wide summary numbers.

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::net::reports::fetch_dashboard;
use crate::net::types::DashboardData;

/// Dashboard page — summary tiles plus recent activity.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = LocalResource::new(|| async { fetch_dashboard().await.ok() });

    view! {
        <MainLayout>
        <section class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    dashboard
                        .get()
                        .map(|data| match data {
                            Some(data) => view! { <DashboardSummaryView data=data/> }.into_any(),
                            None => {
                                view! {
                                    <p class="page-error">"Dashboard data is unavailable."</p>
                                }
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
fn DashboardSummaryView(data: DashboardData) -> impl IntoView {
    let summary = data.summary;
    let recent_items = data.recent_activity.recent_items;

    view! {
        <div class="stat-grid">
            <StatTile label="Total users" value=summary.total_users.to_string()/>
            <StatTile label="Active users" value=summary.active_users.to_string()/>
            <StatTile label="Total items" value=summary.total_items.to_string()/>
            <StatTile label="Active items" value=summary.active_items.to_string()/>
            <StatTile label="Total value" value=format!("{:.2}", summary.total_value)/>
        </div>

        <h2>"Recent items"</h2>
        <ul class="dashboard-page__recent">
            {recent_items
                .into_iter()
                .map(|item| {
                    view! {
                        <li>
                            <span class="recent__name">{item.name}</span>
                            <span class="recent__owner">{item.owner}</span>
                            <span class="recent__date">{item.created_at}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
