use super::*;

#[test]
fn metrics_endpoint_carries_day_window() {
    assert_eq!(metrics_endpoint(30), "/api/v1/reports/metrics?days=30");
    assert_eq!(metrics_endpoint(7), "/api/v1/reports/metrics?days=7");
}

#[test]
fn default_window_is_thirty_days() {
    assert_eq!(DEFAULT_METRICS_DAYS, 30);
}
