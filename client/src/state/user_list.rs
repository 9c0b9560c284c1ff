//! User-management table model: row projection, search/filter/sort, and
//! per-action feedback text.
//!
//! DESIGN
//! ======
//! Rows are rebuilt from a fresh fetch after every mutation; nothing here is
//! updated optimistically. Filtering and sorting are pure functions of the
//! fetched rows and a [`UserQuery`] so the table can recompute on any change.

#[cfg(test)]
#[path = "user_list_test.rs"]
mod user_list_test;

use std::cmp::Ordering;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::net::error::ApiError;
use crate::net::types::{AccountAction, UserRecord, UserRole};

pub const TOKEN_MISSING: &str = "Authentication token is missing. Please log in again.";
pub const NO_MATCHES: &str = "No users found matching the current filters.";

/// Display projection of a backend user record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub verified: bool,
    pub department: Option<String>,
    pub created_at: Option<OffsetDateTime>,
}

impl From<UserRecord> for UserRow {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.user_id,
            name: non_blank(record.username).unwrap_or_else(|| "Unknown".to_owned()),
            email: record.email.unwrap_or_default(),
            role: non_blank(record.role).unwrap_or_else(|| "user".to_owned()),
            status: non_blank(record.status).unwrap_or_else(|| "unknown".to_owned()),
            verified: record.isverified,
            department: non_blank(record.department),
            created_at: record.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

impl UserRow {
    /// Status with its first letter upper-cased (`active` → `Active`).
    #[must_use]
    pub fn display_status(&self) -> String {
        capitalize(&self.status)
    }

    #[must_use]
    pub fn display_role(&self) -> String {
        capitalize(&self.role)
    }

    /// First letter of every space-separated word in the name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name.split(' ').filter_map(|word| word.chars().next()).collect()
    }

    /// Creation date as `M/D/YYYY` in the viewer's time zone, or empty when
    /// unknown.
    #[must_use]
    pub fn created_display(&self) -> String {
        self.created_at.map(|ts| format_date(ts, viewer_offset(ts))).unwrap_or_default()
    }

    /// The status toggle this row offers, if any.
    #[must_use]
    pub fn available_action(&self) -> Option<AccountAction> {
        match self.status.as_str() {
            "active" => Some(AccountAction::Restrict),
            "restricted" => Some(AccountAction::Unrestrict),
            _ => None,
        }
    }
}

/// Status filter options shown in the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Restricted,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Restricted];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "Active",
            Self::Restricted => "Restricted",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Statuses",
            Self::Active => "Active",
            Self::Restricted => "Restricted",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.as_str() == raw).unwrap_or_default()
    }

    fn matches(self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == "active",
            Self::Restricted => status == "restricted",
        }
    }
}

/// Sortable table columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Email,
    Department,
    Status,
    Verified,
    Created,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Search text, filters and sort applied to the fetched rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    /// `None` means all roles.
    pub role: Option<UserRole>,
    pub status: StatusFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl UserQuery {
    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Arrow to show next to a column header.
    #[must_use]
    pub fn indicator(&self, key: SortKey) -> Option<&'static str> {
        (self.sort_key == key).then(|| self.sort_order.arrow())
    }

    #[must_use]
    pub fn matches(&self, row: &UserRow) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = row.name.to_lowercase().contains(&needle)
            || row.email.to_lowercase().contains(&needle)
            || row.department.as_ref().is_some_and(|d| d.to_lowercase().contains(&needle));
        let matches_role = self.role.is_none_or(|role| row.role == role.as_str());
        matches_search && matches_role && self.status.matches(&row.status)
    }

    /// Filtered rows in display order. Ties keep their fetch order.
    #[must_use]
    pub fn apply(&self, rows: &[UserRow]) -> Vec<UserRow> {
        let mut visible: Vec<UserRow> = rows.iter().filter(|row| self.matches(row)).cloned().collect();
        visible.sort_by(|a, b| {
            let ordering = compare_by(self.sort_key, a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        visible
    }
}

fn compare_by(key: SortKey, a: &UserRow, b: &UserRow) -> Ordering {
    match key {
        SortKey::Name => text_cmp(&a.name, &b.name),
        SortKey::Email => text_cmp(&a.email, &b.email),
        SortKey::Department => text_cmp(a.department.as_deref().unwrap_or(""), b.department.as_deref().unwrap_or("")),
        SortKey::Status => text_cmp(&a.status, &b.status),
        // Verified rows first when ascending.
        SortKey::Verified => b.verified.cmp(&a.verified),
        SortKey::Created => a.created_at.cmp(&b.created_at),
    }
}

/// Case-insensitive comparison; on a tie lowercase sorts before uppercase.
#[must_use]
pub fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

/// Prompt shown before sending a restrict/unrestrict request.
#[must_use]
pub fn confirm_prompt(action: AccountAction) -> String {
    format!("Are you sure you want to {} this user?", action.verb())
}

/// Notice shown after a successful action and list refresh.
#[must_use]
pub fn action_success_message(action: AccountAction) -> String {
    format!("User has been {}ed successfully.", action.verb())
}

/// Notice shown when an action fails.
#[must_use]
pub fn action_error_message(action: AccountAction, err: &ApiError) -> String {
    match err {
        ApiError::MissingToken => TOKEN_MISSING.to_owned(),
        ApiError::Unsuccessful { message } => {
            format!("Failed to {} user: {}", action.verb(), message.as_deref().unwrap_or("Unknown error"))
        }
        other => other
            .server_message()
            .map_or_else(|| format!("Failed to {} user", action.verb()), str::to_owned),
    }
}

/// Banner shown when the list cannot be loaded.
#[must_use]
pub fn fetch_error_message(err: &ApiError) -> String {
    match err {
        ApiError::MissingToken => TOKEN_MISSING.to_owned(),
        ApiError::Unsuccessful { message } => {
            format!("Failed to fetch users: {}", message.as_deref().unwrap_or("Unknown error"))
        }
        other => other.server_message().unwrap_or("Failed to fetch users").to_owned(),
    }
}

/// Parse a backend timestamp: RFC 3339, Postgres text
/// (`2024-03-01 10:00:00.123+00`), or epoch milliseconds.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let pg = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory][optional [:[offset_minute]]]"
    );
    if let Ok(ts) = OffsetDateTime::parse(raw, &pg) {
        return Some(ts);
    }
    let millis: i64 = raw.parse().ok()?;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

/// `M/D/YYYY` of `ts` as seen at `offset`.
#[must_use]
pub fn format_date(ts: OffsetDateTime, offset: UtcOffset) -> String {
    let format = format_description!("[month padding:none]/[day padding:none]/[year]");
    // Shifting the last representable day could overflow the year range.
    let local = if (-9998..=9998).contains(&ts.year()) { ts.to_offset(offset) } else { ts };
    local.format(&format).unwrap_or_default()
}

/// Browser time-zone offset in effect at `ts`; UTC outside the browser.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_precision_loss, clippy::cast_possible_truncation))]
fn viewer_offset(ts: OffsetDateTime) -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        let millis = (ts.unix_timestamp_nanos() / 1_000_000) as f64;
        let minutes = -js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis)).get_timezone_offset();
        UtcOffset::from_whole_seconds(minutes as i32 * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ts;
        UtcOffset::UTC
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
