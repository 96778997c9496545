//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components. Written only by applying a
//! [`SessionEvent`], which replaces the whole value so a guard never sees a
//! half-applied update.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True from mount until the first hydration attempt resolves.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }
}

/// The only ways session state changes.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// First hydration attempt finished; `None` means logged out.
    Hydrated(Option<User>),
    LoggedIn(User),
    LoggedOut,
}

impl From<SessionEvent> for SessionState {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Hydrated(Some(user)) | SessionEvent::LoggedIn(user) => SessionState::signed_in(user),
            SessionEvent::Hydrated(None) | SessionEvent::LoggedOut => SessionState::signed_out(),
        }
    }
}
