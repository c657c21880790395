//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` owns the session and its provider subscription; `dashboard` holds
//! the fixed display data.

pub mod auth;
pub mod dashboard;
