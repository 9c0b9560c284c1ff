use super::*;

#[test]
fn event_name_matches_login_pages() {
    assert_eq!(AUTH_STATUS_CHANGE, "authStatusChange");
}

#[test]
fn forwarder_is_claimed_once_per_thread() {
    assert!(claim_forwarder());
    assert!(!claim_forwarder());
    assert!(!claim_forwarder());
}

#[test]
fn publish_and_forward_are_inert_outside_the_browser() {
    publish_auth_change();
    forward_to_window();
}
