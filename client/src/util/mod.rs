//! Browser helpers shared across pages and components.
//!
//! Each helper compiles to a no-op (or a fixed fallback value) without the
//! `hydrate` feature, so SSR rendering never touches `web_sys`.

pub mod auth;
pub mod dialog;
pub mod storage;
