//! Networking modules for the external support-desk API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the authenticated HTTP calls, `error` classifies their
//! failures, and `types` defines the JSON wire schema.

pub mod api;
pub mod error;
pub mod types;
