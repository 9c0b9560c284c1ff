use super::*;

fn valid_draft() -> UserDraft {
    UserDraft {
        username: "jdoe".to_owned(),
        email: "john.doe@example.com".to_owned(),
        phone: String::new(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
        role: Some(UserRole::User),
        department: "Support".to_owned(),
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_draft_builds_request() {
    let req = valid_draft().validate().unwrap();
    assert_eq!(req.username, "jdoe");
    assert_eq!(req.email, "john.doe@example.com");
    assert_eq!(req.department, "Support");
    assert_eq!(req.role, UserRole::User);
}

#[test]
fn empty_draft_reports_every_required_field() {
    let errors = UserDraft::default().validate().unwrap_err();
    assert_eq!(errors.get(UserField::Username), Some("Username is required"));
    assert_eq!(errors.get(UserField::Email), Some("Email is required"));
    assert_eq!(errors.get(UserField::Department), Some("Department is required"));
    assert_eq!(errors.get(UserField::Role), Some("Role is required"));
    assert_eq!(errors.get(UserField::Password), Some("Password is required"));
    // Both passwords are empty, so they match.
    assert_eq!(errors.get(UserField::ConfirmPassword), None);
    assert_eq!(errors.len(), 5);
}

#[test]
fn whitespace_username_is_required() {
    let mut draft = valid_draft();
    draft.username = "   ".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(UserField::Username), Some("Username is required"));
}

#[test]
fn malformed_email_is_invalid() {
    for bad in ["plainaddress", "a@b", "@example.com", "john doe@example"] {
        let mut draft = valid_draft();
        draft.email = bad.to_owned();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(UserField::Email), Some("Email is invalid"), "{bad}");
    }
}

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("first.last@example"));
}

#[test]
fn short_password_is_rejected() {
    let mut draft = valid_draft();
    draft.password = "seven77".to_owned();
    draft.confirm_password = "seven77".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(UserField::Password), Some("Password must be at least 8 characters"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn eight_character_password_is_enough() {
    let mut draft = valid_draft();
    draft.password = "eight888".to_owned();
    draft.confirm_password = "eight888".to_owned();
    assert!(draft.validate().is_ok());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut draft = valid_draft();
    draft.confirm_password = "correct-horse!".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(UserField::ConfirmPassword), Some("Passwords do not match"));
}

#[test]
fn unknown_department_is_rejected() {
    let mut draft = valid_draft();
    draft.department = "Catering".to_owned();
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(UserField::Department), Some("Department is required"));
}

#[test]
fn clearing_a_field_error_leaves_others() {
    let mut errors = UserDraft::default().validate().unwrap_err();
    errors.clear(UserField::Email);
    assert_eq!(errors.get(UserField::Email), None);
    assert_eq!(errors.get(UserField::Username), Some("Username is required"));
}

#[test]
fn set_routes_values_to_fields() {
    let mut draft = UserDraft::default();
    draft.set(UserField::Email, "x@y.io".to_owned());
    draft.set(UserField::Role, "agent".to_owned());
    draft.set(UserField::ConfirmPassword, "pw".to_owned());
    assert_eq!(draft.email, "x@y.io");
    assert_eq!(draft.role, Some(UserRole::Agent));
    assert_eq!(draft.confirm_password, "pw");

    draft.set(UserField::Role, "root".to_owned());
    assert_eq!(draft.role, None);
}

// =============================================================
// Roles
// =============================================================

fn session_with_role(role: &str) -> SessionInfo {
    SessionInfo { role: role.to_owned(), ..SessionInfo::default() }
}

#[test]
fn admins_can_assign_every_role() {
    assert_eq!(selectable_roles(&session_with_role("admin")), vec![UserRole::Admin, UserRole::Agent, UserRole::User]);
}

#[test]
fn non_admins_can_only_create_users() {
    assert_eq!(selectable_roles(&session_with_role("agent")), vec![UserRole::User]);
    assert_eq!(selectable_roles(&SessionInfo::default()), vec![UserRole::User]);
}

// =============================================================
// Submit errors
// =============================================================

#[test]
fn submit_error_prefers_server_message() {
    let err = ApiError::Unsuccessful { message: Some("Email already registered".to_owned()) };
    assert_eq!(submit_error_message(&err), "Email already registered");
}

#[test]
fn submit_error_falls_back_to_generic() {
    let err = ApiError::Rejected { status: 500, message: None };
    assert_eq!(submit_error_message(&err), "Failed to create user. Please try again.");
}

#[test]
fn submit_error_for_missing_token() {
    assert_eq!(
        submit_error_message(&ApiError::MissingToken),
        "Authentication token not found. Please log in again."
    );
}

#[test]
fn created_user_keeps_form_locked_until_redirect() {
    assert!(!unlocks_after(&Ok(())));
    assert!(unlocks_after(&Err(ApiError::Rejected { status: 409, message: None })));
    assert!(unlocks_after(&Err(ApiError::MissingToken)));
}
