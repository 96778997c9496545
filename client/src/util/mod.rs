//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate decision logic and browser concerns from page and
//! component code so they can be tested natively.

pub mod auth;
pub mod session_expiry;
