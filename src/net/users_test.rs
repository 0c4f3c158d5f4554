use super::*;

#[test]
fn user_endpoint_formats_id() {
    assert_eq!(user_endpoint(7), "/api/v1/users/7");
}

#[test]
fn users_endpoint_is_versioned() {
    assert_eq!(USERS_ENDPOINT, "/api/v1/users");
}
