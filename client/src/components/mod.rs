//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render state owned by pages (or, for the header, the session
//! keys in local storage) and avoid issuing backend requests themselves.

pub mod alert;
pub mod card;
pub mod header;
