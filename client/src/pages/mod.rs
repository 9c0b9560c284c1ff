//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session lookup, the single
//! backend request it issues, banner state) and delegates rendering details
//! to `components`.
//!
//! Session keys are read inside an `Effect` rather than during render: the
//! server has no local storage, so reading eagerly would make hydrated markup
//! disagree with the SSR output.

pub mod about;
pub mod create_ticket;
pub mod create_user;
pub mod dashboard;
pub mod view_users;
