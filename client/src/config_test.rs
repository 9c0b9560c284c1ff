use super::*;

#[test]
fn defaults_point_at_same_origin_api() {
    let endpoints = ApiEndpoints::default();
    assert_eq!(endpoints.create_ticket, "/api/tickets/create");
    assert_eq!(endpoints.create_user, "/api/users/create");
    assert_eq!(endpoints.get_all_users, "/api/users");
}

#[test]
fn overrides_replace_defaults() {
    let endpoints = ApiEndpoints::from_overrides(
        Some("https://desk.example.com/tickets"),
        None,
        Some("https://desk.example.com/users"),
        None,
        None,
    );
    assert_eq!(endpoints.create_ticket, "https://desk.example.com/tickets");
    assert_eq!(endpoints.create_user, DEFAULT_CREATE_USER);
    assert_eq!(endpoints.get_all_users, "https://desk.example.com/users");
}

#[test]
fn blank_override_falls_back_to_default() {
    let endpoints = ApiEndpoints::from_overrides(Some("   "), None, None, None, None);
    assert_eq!(endpoints.create_ticket, DEFAULT_CREATE_TICKET);
}

#[test]
fn restrict_url_appends_user_id() {
    let endpoints = ApiEndpoints::default();
    assert_eq!(endpoints.restrict_url("42"), "/api/users/restrict/42");
    assert_eq!(endpoints.unrestrict_url("42"), "/api/users/unrestrict/42");
}

#[test]
fn restrict_url_trims_trailing_slash_on_base() {
    let endpoints = ApiEndpoints::from_overrides(None, None, None, Some("https://x.test/restrict/"), None);
    assert_eq!(endpoints.restrict_url("u-7"), "https://x.test/restrict/u-7");
}
