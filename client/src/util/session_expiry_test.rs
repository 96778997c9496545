use super::*;

#[test]
fn unauthorized_message_mentions_expiry() {
    let err = ApiError::Status { status: 401, detail: Some("token expired".to_owned()) };
    assert_eq!(fetch_error_message(&err), "Your session has expired.");
}

#[test]
fn backend_detail_is_shown_for_other_statuses() {
    let err = ApiError::Status { status: 400, detail: Some("Invalid category.".to_owned()) };
    assert_eq!(fetch_error_message(&err), "Invalid category.");
}

#[test]
fn status_without_detail_includes_code() {
    let err = ApiError::Status { status: 500, detail: None };
    assert_eq!(fetch_error_message(&err), "Request failed (500).");
}

#[test]
fn transport_failures_share_message() {
    assert_eq!(
        fetch_error_message(&ApiError::Transport("x".to_owned())),
        fetch_error_message(&ApiError::Unavailable)
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn confirm_declines_off_browser() {
    assert!(!confirm(RELOGIN_PROMPT));
}
