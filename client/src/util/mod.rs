//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns and pure form logic out of
//! components so both stay testable without a DOM.

pub mod auth;
pub mod submission;
pub mod theme;
pub mod validation;
