use super::*;

fn complete_draft() -> TicketDraft {
    TicketDraft {
        subject: "  VPN drops  ".to_owned(),
        issue: "Disconnects every 10 minutes".to_owned(),
        category: Some(TicketCategory::Network),
        priority: Some(TicketPriority::Medium),
    }
}

#[test]
fn complete_draft_builds_trimmed_request() {
    let req = complete_draft().validate().unwrap();
    assert_eq!(req.subject, "VPN drops");
    assert_eq!(req.issue, "Disconnects every 10 minutes");
    assert_eq!(req.category, TicketCategory::Network);
    assert_eq!(req.priority, TicketPriority::Medium);
}

#[test]
fn empty_draft_is_rejected() {
    assert_eq!(TicketDraft::default().validate(), Err(ALL_FIELDS_REQUIRED));
}

#[test]
fn each_missing_field_is_rejected() {
    let mut no_subject = complete_draft();
    no_subject.subject = "   ".to_owned();
    let mut no_issue = complete_draft();
    no_issue.issue = String::new();
    let mut no_category = complete_draft();
    no_category.category = None;
    let mut no_priority = complete_draft();
    no_priority.priority = None;

    for draft in [no_subject, no_issue, no_category, no_priority] {
        assert_eq!(draft.validate(), Err(ALL_FIELDS_REQUIRED));
    }
}

#[test]
fn missing_token_asks_for_login() {
    assert_eq!(submit_error_message(&ApiError::MissingToken), "Unauthorized! Please log in.");
}

#[test]
fn server_message_wins_over_fallback() {
    let err = ApiError::Rejected { status: 422, message: Some("Subject too long".to_owned()) };
    assert_eq!(submit_error_message(&err), "Subject too long");
}

#[test]
fn network_failure_uses_fallback() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(submit_error_message(&err), "Error creating ticket.");
}
