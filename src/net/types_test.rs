use super::*;

fn sample_user_json() -> &'static str {
    r#"{
        "id": 1,
        "email": "admin@example.com",
        "name": "Admin",
        "role": "admin",
        "active": true,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-02T00:00:00Z"
    }"#
}

#[test]
fn user_roles_use_lowercase_wire_names() {
    let admin: Role = serde_json::from_str(r#""admin""#).expect("admin role");
    let member: Role = serde_json::from_str(r#""user""#).expect("user role");
    assert_eq!(admin, Role::Admin);
    assert_eq!(member, Role::User);
    assert_eq!(serde_json::to_string(&Role::Admin).expect("serialize"), r#""admin""#);
}

#[test]
fn user_round_trips_through_json() {
    let user: User = serde_json::from_str(sample_user_json()).expect("decode user");
    assert_eq!(user.role, Role::Admin);
    let encoded = serde_json::to_string(&user).expect("encode user");
    let decoded: User = serde_json::from_str(&encoded).expect("re-decode user");
    assert_eq!(decoded, user);
}

#[test]
fn user_optional_fields_default() {
    let user: User = serde_json::from_str(
        r#"{"id": 2, "email": "m@example.com", "name": "M", "role": "user"}"#,
    )
    .expect("decode minimal user");
    assert_eq!(user.active, None);
    assert_eq!(user.created_at, None);
}

#[test]
fn envelope_unwraps_present_data() {
    let raw = format!(r#"{{"success": true, "data": {}}}"#, sample_user_json());
    let envelope: ApiResponse<User> = serde_json::from_str(&raw).expect("decode envelope");
    let user = envelope.into_data().expect("data present");
    assert_eq!(user.id, 1);
}

#[test]
fn envelope_without_data_is_invalid_format() {
    let envelope: ApiResponse<User> =
        serde_json::from_str(r#"{"success": false, "message": "nope"}"#).expect("decode envelope");
    assert_eq!(envelope.into_data(), Err(ApiError::InvalidResponseFormat));
}

#[test]
fn envelope_carries_message_and_field_errors() {
    let envelope: ApiResponse<User> = serde_json::from_str(
        r#"{
            "success": false,
            "message": "Validation failed",
            "errors": {"email": ["has already been taken"]}
        }"#,
    )
    .expect("decode envelope");
    assert_eq!(envelope.message.as_deref(), Some("Validation failed"));
    let errors = envelope.errors.expect("field errors");
    assert_eq!(errors["email"], vec!["has already been taken".to_owned()]);
}

#[test]
fn item_decodes_with_embedded_owner() {
    let item: Item = serde_json::from_str(
        r#"{
            "id": 10,
            "name": "Widget",
            "category": "hardware",
            "price": 9.5,
            "quantity": 3,
            "active": true,
            "user": {"id": 1, "name": "Admin", "email": "admin@example.com"},
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#,
    )
    .expect("decode item");
    assert_eq!(item.user.name, "Admin");
    assert_eq!(item.description, None);
    assert_eq!(item.price, Some(9.5));
}

#[test]
fn item_payload_omits_unset_fields() {
    let payload = ItemPayload {
        name: "Widget".to_owned(),
        quantity: 3,
        active: true,
        ..ItemPayload::default()
    };
    let encoded = serde_json::to_value(&payload).expect("encode payload");
    assert_eq!(
        encoded,
        serde_json::json!({"name": "Widget", "quantity": 3, "active": true})
    );
}

#[test]
fn user_payload_omits_password_when_unset() {
    let payload = UserPayload {
        name: "M".to_owned(),
        email: "m@example.com".to_owned(),
        role: Role::User,
        password: None,
        active: None,
    };
    let encoded = serde_json::to_value(&payload).expect("encode payload");
    assert_eq!(
        encoded,
        serde_json::json!({"name": "M", "email": "m@example.com", "role": "user"})
    );
}

#[test]
fn dashboard_data_decodes_nested_sections() {
    let data: DashboardData = serde_json::from_str(
        r#"{
            "summary": {
                "total_users": 5,
                "active_users": 4,
                "total_items": 12,
                "active_items": 10,
                "total_value": 199.5
            },
            "user_growth": {"2025-01": 2, "2025-02": 3},
            "item_distribution": {"hardware": 7, "misc": 5},
            "recent_activity": {
                "recent_users": [["M", "m@example.com", "2025-02-01"]],
                "recent_items": [
                    {"id": 1, "name": "Widget", "category": "hardware", "owner": "Admin", "created_at": "2025-02-01"}
                ]
            }
        }"#,
    )
    .expect("decode dashboard");
    assert_eq!(data.summary.total_users, 5);
    assert_eq!(data.user_growth["2025-02"], 3);
    assert_eq!(data.recent_activity.recent_items[0].owner, "Admin");
    assert_eq!(
        data.recent_activity.recent_users[0],
        ("M".to_owned(), "m@example.com".to_owned(), "2025-02-01".to_owned())
    );
}

#[test]
fn report_metrics_series_are_optional() {
    let metrics: ReportMetrics = serde_json::from_str(
        r#"{
            "item_sales": [
                {
                    "date": "2025-02-01",
                    "data": {
                        "total_sales": 4,
                        "total_revenue": 99.0,
                        "avg_order_value": 24.75,
                        "by_category": {"hardware": {"units_sold": 4, "revenue": 99.0}}
                    }
                }
            ]
        }"#,
    )
    .expect("decode metrics");
    assert!(metrics.daily_metrics.is_none());
    assert!(metrics.user_activity.is_none());
    let sales = metrics.item_sales.expect("item sales series");
    assert_eq!(sales[0].data.by_category["hardware"].units_sold, 4);
}

#[test]
fn trends_data_decodes_defaults() {
    let trends: TrendsData = serde_json::from_str(
        r#"{
            "user_trend": {"current": 5, "previous": 4, "change_percentage": 25.0},
            "item_trend": {"current": 12, "previous": 12, "change_percentage": 0.0}
        }"#,
    )
    .expect("decode trends");
    assert_eq!(trends.user_trend.current, 5);
    assert!(trends.categories.is_empty());
    assert!(trends.top_users.is_empty());
}
