//! Wire schema shared with the `/api/v1` REST backend.
//!
//! Every response wraps its payload in the [`ApiResponse`] envelope; the
//! concrete payload types below mirror the server's serializers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Account role controlling access to management screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A user account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Login form fields, validated by the API rather than locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful login: the extracted bearer token plus the user
/// record from the response body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccess {
    pub token: String,
    pub user: User,
}

/// Owner summary embedded in item records.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ItemOwner {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// An inventory item as returned by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub quantity: i64,
    pub active: bool,
    pub user: ItemOwner,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update body for items.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub quantity: i64,
    pub active: bool,
}

/// Create/update body for users. `password` is only sent when set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Pagination/count metadata some list endpoints attach.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub total: Option<i64>,
}

/// Standard `{success, data, message, errors, meta}` response envelope.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope's payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidResponseFormat`] when the envelope carries
    /// no data, which the session layer reports distinctly from a missing
    /// authorization header.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::InvalidResponseFormat)
    }
}

/// Aggregate numbers shown on the dashboard landing page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardSummary {
    pub total_users: i64,
    pub active_users: i64,
    pub total_items: i64,
    pub active_items: i64,
    pub total_value: f64,
}

/// Recently created item, denormalized for display.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecentItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub owner: String,
    pub created_at: String,
}

/// Latest signups and item creations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RecentActivity {
    /// `(name, email, created_at)` triples for the newest users.
    #[serde(default)]
    pub recent_users: Vec<(String, String, String)>,
    #[serde(default)]
    pub recent_items: Vec<RecentItem>,
}

/// Payload of `GET /api/v1/reports/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub summary: DashboardSummary,
    #[serde(default)]
    pub user_growth: BTreeMap<String, i64>,
    #[serde(default)]
    pub item_distribution: BTreeMap<String, i64>,
    #[serde(default)]
    pub recent_activity: RecentActivity,
}

/// One dated entry in a report series.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Series<T> {
    pub date: String,
    pub data: T,
}

/// Site traffic numbers for one day.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DailyMetrics {
    pub page_views: i64,
    pub unique_visitors: i64,
    pub avg_session_duration: f64,
    pub bounce_rate: f64,
    pub conversion_rate: f64,
}

/// User engagement numbers for one day.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserActivity {
    pub new_users: i64,
    pub active_users: i64,
    pub user_sessions: i64,
    pub avg_actions_per_user: f64,
}

/// Per-category sales breakdown.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategorySales {
    pub units_sold: i64,
    pub revenue: f64,
}

/// Item sales numbers for one day.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ItemSales {
    pub total_sales: i64,
    pub total_revenue: f64,
    pub avg_order_value: f64,
    #[serde(default)]
    pub by_category: BTreeMap<String, CategorySales>,
}

/// Payload of `GET /api/v1/reports/metrics`. Each series is optional; the
/// server omits the ones the requested window has no data for.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ReportMetrics {
    #[serde(default)]
    pub daily_metrics: Option<Vec<Series<DailyMetrics>>>,
    #[serde(default)]
    pub user_activity: Option<Vec<Series<UserActivity>>>,
    #[serde(default)]
    pub item_sales: Option<Vec<Series<ItemSales>>>,
}

/// Current-vs-previous period comparison.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Trend {
    pub current: i64,
    pub previous: i64,
    pub change_percentage: f64,
}

/// Most active account by item count.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TopUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub items_count: i64,
}

/// Payload of `GET /api/v1/reports/trends`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TrendsData {
    #[serde(default)]
    pub user_trend: Trend,
    #[serde(default)]
    pub item_trend: Trend,
    #[serde(default)]
    pub categories: BTreeMap<String, i64>,
    #[serde(default)]
    pub top_users: Vec<TopUser>,
}
