//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context. `route_guard` holds the
//! render-or-redirect wrappers every guarded page goes through.

pub mod loading;
pub mod navbar;
pub mod route_guard;
