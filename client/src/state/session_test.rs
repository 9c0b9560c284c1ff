use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_reads_all_keys() {
    let session = SessionInfo::from_lookup(lookup_from(&[
        ("userToken", "tok"),
        ("userEmail", "ana@example.com"),
        ("username", "ana"),
        ("userRole", "admin"),
    ]));
    assert_eq!(session.username, "ana");
    assert_eq!(session.email, "ana@example.com");
    assert_eq!(session.role, "admin");
    assert_eq!(session.token(), Some("tok"));
    assert!(session.is_logged_in());
    assert!(session.is_admin());
}

#[test]
fn missing_keys_default_to_empty() {
    let session = SessionInfo::from_lookup(lookup_from(&[]));
    assert_eq!(session, SessionInfo::default());
    assert!(!session.is_logged_in());
}

#[test]
fn empty_token_is_not_logged_in() {
    let session = SessionInfo::from_lookup(lookup_from(&[("userToken", "")]));
    assert!(!session.is_logged_in());
    assert_eq!(session.token(), None);
}

#[test]
fn agents_can_manage_users_but_are_not_admins() {
    let session = SessionInfo::from_lookup(lookup_from(&[("userRole", "agent")]));
    assert!(session.can_manage_users());
    assert!(!session.is_admin());
}

#[test]
fn plain_users_cannot_manage_users() {
    let session = SessionInfo::from_lookup(lookup_from(&[("userRole", "user")]));
    assert!(!session.can_manage_users());
}

#[test]
fn storage_is_empty_outside_the_browser() {
    assert_eq!(SessionInfo::load(), SessionInfo::default());
}
