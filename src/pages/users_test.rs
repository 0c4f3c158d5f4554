use super::*;

#[test]
fn parse_user_form_builds_member_payload() {
    let payload = parse_user_form(" Morgan ", " m@example.com ", "longenough", false)
        .expect("valid form");
    assert_eq!(payload.name, "Morgan");
    assert_eq!(payload.email, "m@example.com");
    assert_eq!(payload.role, Role::User);
    assert_eq!(payload.password.as_deref(), Some("longenough"));
}

#[test]
fn parse_user_form_grants_admin_role() {
    let payload = parse_user_form("Morgan", "m@example.com", "longenough", true)
        .expect("valid form");
    assert_eq!(payload.role, Role::Admin);
}

#[test]
fn parse_user_form_requires_name_and_email() {
    assert_eq!(
        parse_user_form("", "m@example.com", "longenough", false),
        Err("Enter a name and email.")
    );
    assert_eq!(
        parse_user_form("Morgan", "   ", "longenough", false),
        Err("Enter a name and email.")
    );
}

#[test]
fn parse_user_form_rejects_short_passwords() {
    assert_eq!(
        parse_user_form("Morgan", "m@example.com", "short", false),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(role_label(Role::Admin), "Administrator");
    assert_eq!(role_label(Role::User), "User");
}
