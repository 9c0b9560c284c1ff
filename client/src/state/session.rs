//! Session info left in local storage by the external login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here validates or refreshes the token. "Logged in" only means a
//! non-empty `userToken` key is present.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::{auth, storage};

pub const TOKEN_KEY: &str = "userToken";
pub const EMAIL_KEY: &str = "userEmail";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "userRole";

const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, EMAIL_KEY, USERNAME_KEY, ROLE_KEY];

/// Snapshot of the session keys at the time it was read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionInfo {
    pub username: String,
    pub email: String,
    pub role: String,
    pub token: Option<String>,
}

impl SessionInfo {
    /// Read the current session from `localStorage`.
    #[must_use]
    pub fn load() -> Self {
        Self::from_lookup(storage::get_item)
    }

    /// Build a session from any key/value lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            username: lookup(USERNAME_KEY).unwrap_or_default(),
            email: lookup(EMAIL_KEY).unwrap_or_default(),
            role: lookup(ROLE_KEY).unwrap_or_default(),
            token: lookup(TOKEN_KEY).filter(|t| !t.is_empty()),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Whether the session may open the user-management views.
    #[must_use]
    pub fn can_manage_users(&self) -> bool {
        matches!(self.role.as_str(), "admin" | "agent")
    }
}

/// Drop every session key and tell mounted listeners about it.
pub fn sign_out() {
    for key in SESSION_KEYS {
        storage::remove_item(key);
    }
    auth::publish_auth_change();
}
