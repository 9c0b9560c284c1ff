//! Create-ticket form model.

#[cfg(test)]
#[path = "ticket_form_test.rs"]
mod ticket_form_test;

use crate::net::error::ApiError;
use crate::net::types::{CreateTicketRequest, TicketCategory, TicketPriority};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const TICKET_CREATED: &str = "Ticket created successfully!";
pub const NOT_LOGGED_IN: &str = "Unauthorized! Please log in.";
const CREATE_FAILED: &str = "Error creating ticket.";

/// How long the success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

/// In-progress ticket; discarded on submit or navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub subject: String,
    pub issue: String,
    pub category: Option<TicketCategory>,
    pub priority: Option<TicketPriority>,
}

impl TicketDraft {
    /// Check required fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ALL_FIELDS_REQUIRED`] if any field is blank or unselected.
    pub fn validate(&self) -> Result<CreateTicketRequest, &'static str> {
        let subject = self.subject.trim();
        let issue = self.issue.trim();
        match (self.category, self.priority) {
            (Some(category), Some(priority)) if !subject.is_empty() && !issue.is_empty() => {
                Ok(CreateTicketRequest { subject: subject.to_owned(), issue: issue.to_owned(), category, priority })
            }
            _ => Err(ALL_FIELDS_REQUIRED),
        }
    }
}

/// Banner text for a failed submission.
#[must_use]
pub fn submit_error_message(err: &ApiError) -> String {
    match err {
        ApiError::MissingToken => NOT_LOGGED_IN.to_owned(),
        other => other.server_message().unwrap_or(CREATE_FAILED).to_owned(),
    }
}
