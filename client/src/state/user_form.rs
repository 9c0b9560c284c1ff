//! Create-user form model and validation.
//!
//! DESIGN
//! ======
//! Validation is run over the whole draft so every failing field gets its own
//! message at once. Editing a field clears only that field's message.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::error::ApiError;
use crate::net::types::{CreateUserRequest, UserRole};
use crate::state::session::SessionInfo;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const DEPARTMENTS: [&str; 10] = [
    "IT",
    "HR",
    "Finance",
    "Marketing",
    "Sales",
    "Support",
    "Operations",
    "Customer Service",
    "Research & Development",
    "Legal",
];

pub const USER_CREATED: &str = "User created successfully! Login credentials sent via email.";
const CREATE_FAILED: &str = "Failed to create user. Please try again.";
const TOKEN_NOT_FOUND: &str = "Authentication token not found. Please log in again.";

/// Delay between the success banner and the redirect to the user list.
pub const REDIRECT_DELAY_MS: u32 = 500;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Form inputs that can carry a validation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Username,
    Email,
    Department,
    Role,
    Password,
    ConfirmPassword,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<UserField, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: UserField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn clear(&mut self, field: UserField) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn set(&mut self, field: UserField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// In-progress user account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    /// Collected for the admin's reference; the backend does not take it.
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<UserRole>,
    pub department: String,
}

impl UserDraft {
    /// Store an edited input value. Role values outside [`UserRole`] unset it.
    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::Username => self.username = value,
            UserField::Email => self.email = value,
            UserField::Department => self.department = value,
            UserField::Role => self.role = UserRole::parse(&value),
            UserField::Password => self.password = value,
            UserField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Validate every field and build the request body.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self) -> Result<CreateUserRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let username = self.username.trim();
        if username.is_empty() {
            errors.set(UserField::Username, "Username is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.set(UserField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.set(UserField::Email, "Email is invalid");
        }

        if !DEPARTMENTS.contains(&self.department.as_str()) {
            errors.set(UserField::Department, "Department is required");
        }

        if self.role.is_none() {
            errors.set(UserField::Role, "Role is required");
        }

        if self.password.is_empty() {
            errors.set(UserField::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.set(UserField::Password, "Password must be at least 8 characters");
        }

        if self.password != self.confirm_password {
            errors.set(UserField::ConfirmPassword, "Passwords do not match");
        }

        match self.role {
            Some(role) if errors.is_empty() => Ok(CreateUserRequest {
                username: username.to_owned(),
                email: email.to_owned(),
                password: self.password.clone(),
                department: self.department.clone(),
                role,
            }),
            _ => Err(errors),
        }
    }
}

/// Loose `something@something.something` shape check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Roles the current session may hand out. Only admins can create staff.
#[must_use]
pub fn selectable_roles(session: &SessionInfo) -> Vec<UserRole> {
    if session.is_admin() {
        UserRole::ALL.to_vec()
    } else {
        vec![UserRole::User]
    }
}

/// Whether the form accepts another submit once a request settles. A created
/// user keeps it locked until the redirect away.
#[must_use]
pub fn unlocks_after(result: &Result<(), ApiError>) -> bool {
    result.is_err()
}

/// Form-level message for a failed submission.
#[must_use]
pub fn submit_error_message(err: &ApiError) -> String {
    match err {
        ApiError::MissingToken => TOKEN_NOT_FOUND.to_owned(),
        other => other.server_message().unwrap_or(CREATE_FAILED).to_owned(),
    }
}
