//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by view (`ticket_form`, `user_form`, `user_list`) plus the
//! shared `session` snapshot, so each page depends on a small focused model
//! whose rules can be tested without a browser.

pub mod session;
pub mod ticket_form;
pub mod user_form;
pub mod user_list;
