//! Session store: hydration, login, and logout against the backend.
//!
//! DESIGN
//! ======
//! Operations do not touch reactive state. They return the [`SessionEvent`]
//! the owner should apply, or `None` when the result has gone stale.
//!
//! A generation counter orders the operations. `hydrate` remembers the
//! generation it started in and drops its result if `login`, `logout`, or
//! `cancel` advanced it in the meantime; a stale hydration also leaves the
//! persisted credential alone, since it may belong to a newer login.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::api;
use crate::net::http::{ApiError, FetchTransport, Transport};
use crate::net::interceptor::ApiClient;
use crate::net::storage::{KeyValueStorage, LocalStorage};
use crate::state::auth::SessionEvent;

/// Why a login attempt did not produce a session.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// Backend refused the email/password pair.
    #[error("invalid email or password (status {status})")]
    Rejected { status: u16 },

    /// Token request failed for another reason.
    #[error("login request failed: {0}")]
    Request(ApiError),

    /// Tokens were issued but the profile could not be fetched.
    #[error("profile fetch failed: {0}")]
    Profile(ApiError),
}

#[derive(Clone, Debug)]
pub struct SessionStore<T, S> {
    client: ApiClient<T, S>,
    generation: Arc<AtomicU64>,
}

pub type BrowserSessionStore = SessionStore<FetchTransport, LocalStorage>;

impl<T: Transport, S: KeyValueStorage> SessionStore<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self { client, generation: Arc::new(AtomicU64::new(0)) }
    }

    /// The credential-attaching client pages should use.
    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn advance(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Invalidate any in-flight hydration (e.g. the owning view unmounted).
    pub fn cancel(&self) {
        self.advance();
    }

    /// Rebuild the session from the persisted credential.
    ///
    /// Without a credential this resolves immediately, with no request.
    /// Any failure clears the credential and yields a logged-out session.
    /// Returns `None` if the result was superseded while in flight.
    pub async fn hydrate(&self) -> Option<SessionEvent> {
        let started = self.generation();
        if self.client.credentials().access_token().is_none() {
            return Some(SessionEvent::Hydrated(None));
        }

        let result = api::fetch_current_user(&self.client).await;
        if self.generation() != started {
            leptos::logging::log!("session hydration superseded; discarding result");
            return None;
        }

        match result {
            Ok(user) => Some(SessionEvent::Hydrated(Some(user))),
            Err(e) => {
                leptos::logging::warn!("session hydration failed: {e}");
                self.client.credentials().clear();
                Some(SessionEvent::Hydrated(None))
            }
        }
    }

    /// Exchange credentials for tokens, fetch the profile, then persist.
    ///
    /// Nothing is persisted unless both steps succeed.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError`] describing which step failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionEvent, LoginError> {
        let tokens = api::obtain_tokens(&self.client, email, password)
            .await
            .map_err(|e| match e {
                ApiError::Status { status: status @ (400 | 401), .. } => LoginError::Rejected { status },
                other => LoginError::Request(other),
            })?;

        let user = api::fetch_user_with_token(&self.client, &tokens.access)
            .await
            .map_err(LoginError::Profile)?;

        self.advance();
        self.client.credentials().persist(&tokens);
        Ok(SessionEvent::LoggedIn(user))
    }

    /// Forget the persisted credentials. Navigation is the caller's job.
    pub fn logout(&self) -> SessionEvent {
        self.advance();
        self.client.credentials().clear();
        SessionEvent::LoggedOut
    }
}
