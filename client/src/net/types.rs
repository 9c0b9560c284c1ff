//! Wire DTOs for the support-desk backend.
//!
//! DESIGN
//! ======
//! Request bodies serialize exactly the fields the backend expects. Response
//! types are lenient: the backend is external, so missing or loosely typed
//! fields (numeric ids, stringly booleans) are accepted and normalized later.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Ticket category as offered by the create-ticket form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "hardware")]
    Hardware,
    #[serde(rename = "software")]
    Software,
    #[serde(rename = "network")]
    Network,
    #[serde(rename = "account access")]
    AccountAccess,
    #[serde(rename = "other")]
    Other,
}

impl TicketCategory {
    pub const ALL: [Self; 5] = [Self::Hardware, Self::Software, Self::Network, Self::AccountAccess, Self::Other];

    /// Value sent on the wire and used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Network => "network",
            Self::AccountAccess => "account access",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Network => "Network",
            Self::AccountAccess => "Account Access",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Ticket priority as offered by the create-ticket form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Account role understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Agent,
    User,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Agent, Self::User];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::User => "user",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Agent => "Agent",
            Self::User => "User",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// Body of the create-ticket POST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub issue: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
}

/// Body of the create-user POST. Phone and confirmation are form-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub role: UserRole,
}

/// Common response envelope: `{ success, message, ...payload }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

/// Payload for responses that carry nothing beyond the envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NoPayload {}

/// Payload of the list-users GET.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserListPayload {
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// A user as stored by the backend.
///
/// Every field decodes leniently so one odd record cannot fail the whole
/// list: wrongly typed text fields read as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Backend identifier; numeric ids are kept as their decimal string,
    /// missing or null ids as an empty string.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub user_id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub role: Option<String>,
    /// Creation timestamp. Numbers (epoch milliseconds) keep their decimal
    /// form and are interpreted by the row projection.
    #[serde(default, deserialize_with = "deserialize_id_like")]
    pub created_at: Option<String>,
    /// `active`, `restricted`, or whatever the backend reports.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub isverified: bool,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub department: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Account restriction toggle exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountAction {
    Restrict,
    Unrestrict,
}

impl AccountAction {
    /// Verb used in prompts and messages.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Restrict => "restrict",
            Self::Unrestrict => "unrestrict",
        }
    }

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Restrict => "Restrict",
            Self::Unrestrict => "Unrestrict",
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_id_like(deserializer)?.unwrap_or_default())
}

/// Strings as-is, numbers as their decimal form, anything else absent.
fn deserialize_id_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => s == "true",
        _ => false,
    })
}
