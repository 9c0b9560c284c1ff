use super::*;
use crate::net::types::{NoPayload, UserListPayload};

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_value_formats_token() {
    assert_eq!(bearer_value(Some("abc.def")), Ok("Bearer abc.def".to_owned()));
}

#[test]
fn bearer_value_requires_non_empty_token() {
    assert_eq!(bearer_value(None), Err(ApiError::MissingToken));
    assert_eq!(bearer_value(Some("")), Err(ApiError::MissingToken));
}

// =============================================================
// Response interpretation
// =============================================================

#[test]
fn optional_flag_accepts_body_without_success() {
    let resp = interpret_response::<NoPayload>(201, r#"{"ticket_id": 3}"#, SuccessFlag::Optional).unwrap();
    assert_eq!(resp.success, None);
}

#[test]
fn optional_flag_accepts_empty_body() {
    assert!(interpret_response::<NoPayload>(204, "", SuccessFlag::Optional).is_ok());
}

#[test]
fn optional_flag_rejects_explicit_false() {
    let err = interpret_response::<NoPayload>(200, r#"{"success": false, "message": "Duplicate"}"#, SuccessFlag::Optional)
        .unwrap_err();
    assert_eq!(err, ApiError::Unsuccessful { message: Some("Duplicate".to_owned()) });
}

#[test]
fn required_flag_rejects_missing_success() {
    let err = interpret_response::<NoPayload>(200, "{}", SuccessFlag::Required).unwrap_err();
    assert_eq!(err, ApiError::Unsuccessful { message: None });
}

#[test]
fn required_flag_returns_payload() {
    let body = r#"{"success": true, "users": [{"user_id": 1, "username": "a"}]}"#;
    let resp = interpret_response::<UserListPayload>(200, body, SuccessFlag::Required).unwrap();
    assert_eq!(resp.payload.users.len(), 1);
    assert_eq!(resp.payload.users[0].user_id, "1");
}

#[test]
fn user_list_tolerates_null_id_and_numeric_timestamp() {
    let body = r#"{
        "success": true,
        "users": [
            {"user_id": "a1", "username": "alice", "created_at": "2024-03-01T10:00:00Z"},
            {"user_id": null, "username": "ghost"},
            {"user_id": 7, "created_at": 1709287200000}
        ]
    }"#;
    let users = interpret_response::<UserListPayload>(200, body, SuccessFlag::Required).unwrap().payload.users;
    assert_eq!(users.len(), 3);
    assert_eq!(users[1].user_id, "");
    assert_eq!(users[2].created_at.as_deref(), Some("1709287200000"));
}

#[test]
fn non_2xx_carries_server_message() {
    let err = interpret_response::<NoPayload>(403, r#"{"success": false, "message": "Admins only"}"#, SuccessFlag::Required)
        .unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 403, message: Some("Admins only".to_owned()) });
    assert_eq!(err.server_message(), Some("Admins only"));
}

#[test]
fn non_2xx_with_html_body_has_no_message() {
    let err = interpret_response::<NoPayload>(502, "<html>Bad Gateway</html>", SuccessFlag::Optional).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 502, message: None });
}

#[test]
fn blank_server_message_is_dropped() {
    let err = interpret_response::<NoPayload>(400, r#"{"message": "  "}"#, SuccessFlag::Optional).unwrap_err();
    assert_eq!(err.server_message(), None);
}

#[test]
fn malformed_2xx_body_is_decode_error() {
    let err = interpret_response::<UserListPayload>(200, "not json", SuccessFlag::Required).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.server_message(), None);
}

// =============================================================
// URLs
// =============================================================

#[test]
fn account_action_url_selects_endpoint() {
    let endpoints = ApiEndpoints::default();
    assert_eq!(account_action_url(&endpoints, "9", AccountAction::Restrict), "/api/users/restrict/9");
    assert_eq!(account_action_url(&endpoints, "9", AccountAction::Unrestrict), "/api/users/unrestrict/9");
}
