//! Backend endpoint configuration.
//!
//! Endpoint URLs are baked in at build time from `STACKIT_*` environment
//! variables, falling back to same-origin `/api/...` paths. The backend itself
//! is an external service; this crate only needs to know where to send
//! requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CREATE_TICKET: &str = "/api/tickets/create";
pub const DEFAULT_CREATE_USER: &str = "/api/users/create";
pub const DEFAULT_GET_ALL_USERS: &str = "/api/users";
pub const DEFAULT_RESTRICT_USER: &str = "/api/users/restrict";
pub const DEFAULT_UNRESTRICT_USER: &str = "/api/users/unrestrict";

/// Endpoint URLs for every backend call the UI makes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub create_ticket: String,
    pub create_user: String,
    pub get_all_users: String,
    pub restrict_user: String,
    pub unrestrict_user: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            create_ticket: DEFAULT_CREATE_TICKET.to_owned(),
            create_user: DEFAULT_CREATE_USER.to_owned(),
            get_all_users: DEFAULT_GET_ALL_USERS.to_owned(),
            restrict_user: DEFAULT_RESTRICT_USER.to_owned(),
            unrestrict_user: DEFAULT_UNRESTRICT_USER.to_owned(),
        }
    }
}

impl ApiEndpoints {
    /// Resolve endpoints from variables captured at compile time.
    ///
    /// - `STACKIT_CREATE_TICKET`
    /// - `STACKIT_CREATE_USER`
    /// - `STACKIT_GET_ALL_USERS`
    /// - `STACKIT_RESTRICT_USER`
    /// - `STACKIT_UNRESTRICT_USER`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("STACKIT_CREATE_TICKET"),
            option_env!("STACKIT_CREATE_USER"),
            option_env!("STACKIT_GET_ALL_USERS"),
            option_env!("STACKIT_RESTRICT_USER"),
            option_env!("STACKIT_UNRESTRICT_USER"),
        )
    }

    fn from_overrides(
        create_ticket: Option<&str>,
        create_user: Option<&str>,
        get_all_users: Option<&str>,
        restrict_user: Option<&str>,
        unrestrict_user: Option<&str>,
    ) -> Self {
        Self {
            create_ticket: pick(create_ticket, DEFAULT_CREATE_TICKET),
            create_user: pick(create_user, DEFAULT_CREATE_USER),
            get_all_users: pick(get_all_users, DEFAULT_GET_ALL_USERS),
            restrict_user: pick(restrict_user, DEFAULT_RESTRICT_USER),
            unrestrict_user: pick(unrestrict_user, DEFAULT_UNRESTRICT_USER),
        }
    }

    /// URL for restricting the given user.
    #[must_use]
    pub fn restrict_url(&self, user_id: &str) -> String {
        join_id(&self.restrict_user, user_id)
    }

    /// URL for lifting a restriction on the given user.
    #[must_use]
    pub fn unrestrict_url(&self, user_id: &str) -> String {
        join_id(&self.unrestrict_user, user_id)
    }
}

fn pick(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => default.to_owned(),
    }
}

fn join_id(base: &str, user_id: &str) -> String {
    format!("{}/{user_id}", base.trim_end_matches('/'))
}
