//! Read-only reporting calls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::error::ApiError;
use super::types::{DashboardData, ReportMetrics, TrendsData};

pub const DASHBOARD_ENDPOINT: &str = "/api/v1/reports/dashboard";
pub const METRICS_ENDPOINT: &str = "/api/v1/reports/metrics";
pub const TRENDS_ENDPOINT: &str = "/api/v1/reports/trends";

/// Time window the metrics report covers when none is chosen.
pub const DEFAULT_METRICS_DAYS: u32 = 30;

#[cfg(any(test, feature = "hydrate"))]
fn metrics_endpoint(days: u32) -> String {
    format!("{METRICS_ENDPOINT}?days={days}")
}

/// Fetch the dashboard summary payload.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_dashboard() -> Result<DashboardData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(DASHBOARD_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch time-series metrics for the last `days` days.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_metrics(days: u32) -> Result<ReportMetrics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(&metrics_endpoint(days)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = days;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the trends comparison payload.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_trends() -> Result<TrendsData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(TRENDS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
