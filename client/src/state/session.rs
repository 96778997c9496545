//! Session context wiring for the component tree.
//!
//! ARCHITECTURE
//! ============
//! The root component owns one [`SessionHandle`]: a signal holding the
//! current [`SessionState`] and the [`BrowserSessionStore`] that computes
//! changes to it. Components read the signal; store results are applied
//! through [`SessionHandle::apply`], the single write path.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::interceptor::ApiClient;
use crate::routes::AppRoute;
use crate::state::auth::{SessionEvent, SessionState};
use crate::state::session_store::{BrowserSessionStore, SessionStore};

#[derive(Clone, Debug)]
pub struct SessionHandle {
    state: RwSignal<SessionState>,
    store: BrowserSessionStore,
}

impl SessionHandle {
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn store(&self) -> &BrowserSessionStore {
        &self.store
    }

    /// Replace the session state with the result of a store operation.
    pub fn apply(&self, event: SessionEvent) {
        self.state.set(SessionState::from(event));
    }

    /// Clear credentials and reload the app at the login route.
    pub fn logout(&self) {
        self.apply(self.store.logout());
        hard_navigate(AppRoute::Login.path());
    }
}

/// Create the session, hydrate it once, and provide it to descendants.
pub fn provide_session() -> SessionHandle {
    let handle = SessionHandle {
        state: RwSignal::new(SessionState::default()),
        store: SessionStore::new(ApiClient::browser()),
    };
    provide_context(handle.clone());

    #[cfg(feature = "hydrate")]
    {
        let hydrating = handle.clone();
        leptos::task::spawn_local(async move {
            if let Some(event) = hydrating.store.hydrate().await {
                hydrating.apply(event);
            }
        });
    }

    let store = handle.store.clone();
    on_cleanup(move || store.cancel());

    handle
}

pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn navigation_failure(path: &str, reason: &str) -> String {
    format!("navigation to {path} failed: {reason}")
}

/// Full page load, discarding in-memory router state.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(path) {
                    leptos::logging::warn!("{}", navigation_failure(path, &format!("{e:?}")));
                }
            }
            None => leptos::logging::warn!("{}", navigation_failure(path, "no window")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
