//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain session value, `session_store` talks to the backend,
//! and `session` wires the two into the component tree.

pub mod auth;
pub mod session;
pub mod session_store;
