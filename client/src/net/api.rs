//! REST endpoints consumed by the session core and the pages.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. None of them clears the
//! session on 401; pages decide what an expired credential means for them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, ApiRequest, Transport};
use super::interceptor::ApiClient;
use super::storage::KeyValueStorage;
use super::types::{
    AccountDecision, LoginRequest, NewReport, RegistrationRequest, ReportStatus, Role, StatusChoice, TokenPair, User,
};

pub const ME_ENDPOINT: &str = "/api/users/me/";
pub const LOGIN_ENDPOINT: &str = "/api/users/login/";
pub const REGISTER_ENDPOINT: &str = "/api/users/create/";
pub const REPORTS_ENDPOINT: &str = "/api/reports/";
pub const ALL_REPORTS_ENDPOINT: &str = "/api/reports/all/";
pub const NOTIFICATIONS_ENDPOINT: &str = "/api/notifications/";
pub const CRIME_STATS_ENDPOINT: &str = "/api/analytics/crimestats/";
pub const USERS_ENDPOINT: &str = "/api/users/";
pub const REPORT_STATUS_CHOICES_ENDPOINT: &str = "/api/reports/status-choices/";

fn notification_read_endpoint(id: i64) -> String {
    format!("/api/notifications/{id}/update/")
}

fn report_endpoint(id: i64) -> String {
    format!("/api/reports/{id}/")
}

fn user_endpoint(id: i64) -> String {
    format!("/api/users/{id}/")
}

fn user_approval_endpoint(id: i64) -> String {
    format!("/api/users/{id}/approve/")
}

/// Fetch the profile for the stored credential.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or a profile
/// that does not decode (including an unknown role).
pub async fn fetch_current_user<T: Transport, S: KeyValueStorage>(client: &ApiClient<T, S>) -> Result<User, ApiError> {
    client.get_json(ME_ENDPOINT).await
}

/// Fetch the profile for a credential that has not been persisted yet.
///
/// # Errors
///
/// Same as [`fetch_current_user`].
pub async fn fetch_user_with_token<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    access_token: &str,
) -> Result<User, ApiError> {
    client
        .send(ApiRequest::get(ME_ENDPOINT).bearer(access_token))
        .await?
        .error_for_status()?
        .json()
}

/// Exchange email and password for access + refresh credentials.
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the backend rejects the credentials.
pub async fn obtain_tokens<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<TokenPair, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    client
        .send_anonymous(ApiRequest::post(LOGIN_ENDPOINT).json(&body)?)
        .await?
        .error_for_status()?
        .json()
}

/// Create a new account. Law-enforcement accounts start out pending.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the backend's `detail` when validation fails.
pub async fn register<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    request: &RegistrationRequest,
) -> Result<(), ApiError> {
    client
        .send_anonymous(ApiRequest::post(REGISTER_ENDPOINT).json(request)?)
        .await?
        .error_for_status()?;
    Ok(())
}

/// Submit a crime report on behalf of the current user.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn submit_report<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    report: &NewReport,
) -> Result<serde_json::Value, ApiError> {
    client.post_json(REPORTS_ENDPOINT, report).await
}

/// Fetch a JSON list from a bearer-protected collection endpoint.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or a body that
/// is not a JSON array.
pub async fn fetch_records<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    endpoint: &str,
) -> Result<Vec<serde_json::Value>, ApiError> {
    client.get_json(endpoint).await
}

/// Mark one notification as read.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn mark_notification_read<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: i64,
) -> Result<(), ApiError> {
    let request = ApiRequest::patch(notification_read_endpoint(id)).json(&serde_json::json!({ "is_read": true }))?;
    client.send(request).await?.error_for_status()?;
    Ok(())
}

/// Move a report to a new review status.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status (403 for
/// citizens, 404 for an unknown report).
pub async fn update_report_status<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: i64,
    status: ReportStatus,
) -> Result<(), ApiError> {
    let request = ApiRequest::patch(report_endpoint(id)).json(&serde_json::json!({ "status": status }))?;
    client.send(request).await?.error_for_status()?;
    Ok(())
}

/// Statuses the backend accepts for reports, in its order.
///
/// Entries this client does not know are skipped.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or a body
/// that is not a list of `{value, label}` pairs.
pub async fn fetch_report_status_choices<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
) -> Result<Vec<ReportStatus>, ApiError> {
    let choices: Vec<StatusChoice> = client.get_json(REPORT_STATUS_CHOICES_ENDPOINT).await?;
    Ok(choices
        .iter()
        .filter_map(|choice| ReportStatus::parse(&choice.value))
        .collect())
}

/// Change a user's role (admin only).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure or a non-2xx status.
pub async fn update_user_role<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: i64,
    role: Role,
) -> Result<(), ApiError> {
    let request = ApiRequest::patch(user_endpoint(id)).json(&serde_json::json!({ "role": role }))?;
    client.send(request).await?.error_for_status()?;
    Ok(())
}

/// Approve or reject a law-enforcement account (admin only).
///
/// # Errors
///
/// Returns [`ApiError::Status`] with the backend message when the user is
/// not law enforcement or does not exist.
pub async fn decide_account<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: i64,
    decision: AccountDecision,
) -> Result<(), ApiError> {
    let request = ApiRequest::post(user_approval_endpoint(id)).json(&serde_json::json!({ "action": decision }))?;
    client.send(request).await?.error_for_status()?;
    Ok(())
}
