//! Page-side handling of failed data fetches.
//!
//! The request client never clears the session on its own. Pages that get a
//! 401 ask the user whether to log in again, and only log out on "yes".

#[cfg(test)]
#[path = "session_expiry_test.rs"]
mod session_expiry_test;

use crate::net::http::ApiError;
use crate::state::session::SessionHandle;

pub const RELOGIN_PROMPT: &str = "Session may have expired. Do you want to log in again?";

/// Inline message for a failed page fetch.
pub fn fetch_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 401, .. } => "Your session has expired.".to_owned(),
        ApiError::Status { status: 403, .. } => "You do not have permission to view this data.".to_owned(),
        ApiError::Status { detail: Some(detail), .. } => detail.clone(),
        ApiError::Status { status, detail: None } => format!("Request failed ({status})."),
        ApiError::Transport(_) | ApiError::Unavailable => "Could not reach the server.".to_owned(),
        ApiError::Decode(_) => "Unexpected response from the server.".to_owned(),
    }
}

/// Log the failure and, for an expired credential, offer to log in again.
pub fn handle_fetch_error(session: &SessionHandle, err: &ApiError) -> String {
    leptos::logging::warn!("page fetch failed: {err}");
    if err.is_unauthorized() && confirm(RELOGIN_PROMPT) {
        session.logout();
    }
    fetch_error_message(err)
}

fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
