//! Generic list page for the backend's collection endpoints.
//!
//! Reports, notifications, users and crime statistics all come back as JSON
//! arrays of flat objects. This page fetches one endpoint through the
//! credential interceptor and renders a card per record from a few
//! well-known fields. Depending on [`RecordActions`], each card also offers
//! buttons that update the record on the backend and then in place.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api;
use crate::net::http::{ApiError, Transport};
use crate::net::interceptor::ApiClient;
use crate::net::storage::KeyValueStorage;
use crate::net::types::{AccountDecision, AccountStatus, ReportStatus, Role};

#[cfg(feature = "hydrate")]
use crate::state::session::use_session;

const HEADING_KEYS: [&str; 4] = ["category", "incident_type", "email", "title"];
const DETAIL_KEYS: [&str; 2] = ["description", "message"];
const META_KEYS: [&str; 6] = ["status", "role", "total_reports", "user_role", "created_at", "timestamp"];

fn field_text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn record_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

pub(crate) fn record_heading(record: &Value) -> String {
    HEADING_KEYS
        .iter()
        .find_map(|key| field_text(record, key))
        .or_else(|| record_id(record).map(|id| format!("Record #{id}")))
        .unwrap_or_else(|| "Record".to_owned())
}

pub(crate) fn record_detail(record: &Value) -> Option<String> {
    DETAIL_KEYS.iter().find_map(|key| field_text(record, key))
}

/// Secondary `(label, value)` pairs shown under the heading.
pub(crate) fn record_meta(record: &Value) -> Vec<(&'static str, String)> {
    META_KEYS
        .iter()
        .filter_map(|key| field_text(record, key).map(|text| (*key, text)))
        .collect()
}

pub(crate) fn is_unread(record: &Value) -> bool {
    record.get("is_read").and_then(Value::as_bool) == Some(false)
}

/// Write `value` into `key` of the record with `id`, if present.
pub(crate) fn set_field_locally(records: &mut [Value], id: i64, key: &str, value: Value) {
    if let Some(obj) = records
        .iter_mut()
        .find(|r| record_id(r) == Some(id))
        .and_then(Value::as_object_mut)
    {
        obj.insert(key.to_owned(), value);
    }
}

/// Which row actions a list offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordActions {
    #[default]
    None,
    /// "Mark as read" on unread notifications.
    MarkRead,
    /// Move a report to another review status.
    ReportStatus,
    /// Approve, reject, promote or revoke accounts.
    UserAdmin,
}

/// Admin action on one user row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UserAction {
    Decide(AccountDecision),
    SetRole(Role),
}

impl UserAction {
    pub(crate) fn label(self) -> &'static str {
        match self {
            UserAction::Decide(AccountDecision::Approve) => "Approve",
            UserAction::Decide(AccountDecision::Reject) => "Reject",
            UserAction::SetRole(Role::LawEnforcement) => "Make Law Enforcement",
            UserAction::SetRole(Role::Citizen) => "Revoke Law Enforcement",
            UserAction::SetRole(Role::Admin) => "Make Admin",
        }
    }
}

/// One action taken on a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RowAction {
    MarkRead,
    SetStatus(ReportStatus),
    User(UserAction),
}

impl RowAction {
    /// Field and value to write into the local row once the backend accepts.
    pub(crate) fn local_change(self) -> (&'static str, Value) {
        match self {
            RowAction::MarkRead => ("is_read", Value::Bool(true)),
            RowAction::SetStatus(status) => ("status", Value::from(status.as_str())),
            RowAction::User(UserAction::SetRole(role)) => ("role", Value::from(role.as_str())),
            RowAction::User(UserAction::Decide(decision)) => {
                let status = match decision.resulting_status() {
                    AccountStatus::Approved => "approved",
                    AccountStatus::Rejected => "rejected",
                    AccountStatus::Pending | AccountStatus::Suspended | AccountStatus::Unknown => "unknown",
                };
                ("status", Value::from(status))
            }
        }
    }
}

/// Send the request behind `action` for the record with `id`.
///
/// # Errors
///
/// Returns the [`ApiError`] from the underlying call.
pub(crate) async fn perform<T: Transport, S: KeyValueStorage>(
    client: &ApiClient<T, S>,
    id: i64,
    action: RowAction,
) -> Result<(), ApiError> {
    match action {
        RowAction::MarkRead => api::mark_notification_read(client, id).await,
        RowAction::SetStatus(status) => api::update_report_status(client, id, status).await,
        RowAction::User(UserAction::SetRole(role)) => api::update_user_role(client, id, role).await,
        RowAction::User(UserAction::Decide(decision)) => api::decide_account(client, id, decision).await,
    }
}

/// Statuses a report can be moved to: every choice except its current one.
pub(crate) fn status_targets(record: &Value, choices: &[ReportStatus]) -> Vec<ReportStatus> {
    let current = record.get("status").and_then(Value::as_str).and_then(ReportStatus::parse);
    choices.iter().copied().filter(|s| Some(*s) != current).collect()
}

/// Admin actions for a user row. Admin accounts are left alone.
pub(crate) fn user_actions(record: &Value) -> Vec<UserAction> {
    let role = record.get("role").and_then(Value::as_str).and_then(Role::parse);
    let pending = record.get("status").and_then(Value::as_str) == Some("pending");
    match role {
        Some(Role::Citizen) => vec![UserAction::SetRole(Role::LawEnforcement)],
        Some(Role::LawEnforcement) if pending => vec![
            UserAction::Decide(AccountDecision::Approve),
            UserAction::Decide(AccountDecision::Reject),
            UserAction::SetRole(Role::Citizen),
        ],
        Some(Role::LawEnforcement) => vec![UserAction::SetRole(Role::Citizen)],
        Some(Role::Admin) | None => Vec::new(),
    }
}

/// Actions to render for one row.
pub(crate) fn row_actions(actions: RecordActions, record: &Value, choices: &[ReportStatus]) -> Vec<RowAction> {
    match actions {
        RecordActions::None => Vec::new(),
        RecordActions::MarkRead if is_unread(record) => vec![RowAction::MarkRead],
        RecordActions::MarkRead => Vec::new(),
        RecordActions::ReportStatus => status_targets(record, choices)
            .into_iter()
            .map(RowAction::SetStatus)
            .collect(),
        RecordActions::UserAdmin => user_actions(record).into_iter().map(RowAction::User).collect(),
    }
}

#[component]
pub fn RecordListPage(
    title: &'static str,
    endpoint: &'static str,
    #[prop(optional)] actions: RecordActions,
) -> impl IntoView {
    let records = RwSignal::new(None::<Vec<Value>>);
    let error = RwSignal::new(String::new());
    let choices = RwSignal::new(ReportStatus::ALL.to_vec());
    #[cfg(feature = "hydrate")]
    let session = use_session();

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_records(session.store().client(), endpoint).await {
                Ok(list) => records.set(Some(list)),
                Err(e) => {
                    error.set(crate::util::session_expiry::handle_fetch_error(&session, &e));
                    records.set(Some(Vec::new()));
                }
            }
            if actions == RecordActions::ReportStatus {
                match api::fetch_report_status_choices(session.store().client()).await {
                    Ok(list) if !list.is_empty() => choices.set(list),
                    Ok(_) => {}
                    Err(e) => leptos::logging::warn!("status choices unavailable, using defaults: {e}"),
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
    }

    let on_action = move |id: i64, action: RowAction| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match perform(session.store().client(), id, action).await {
                    Ok(()) => {
                        let (key, value) = action.local_change();
                        records.update(|list| {
                            if let Some(list) = list {
                                set_field_locally(list, id, key, value);
                            }
                        });
                    }
                    Err(e) => error.set(crate::util::session_expiry::handle_fetch_error(&session, &e)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, action);
        }
    };

    view! {
        <div class="record-list-page">
            <h2>{title}</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>
            {move || match records.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! { <p class="empty">"Nothing to show yet."</p> }.into_any(),
                Some(list) => {
                    let choices = choices.get();
                    let on_action = on_action.clone();
                    view! {
                        <ul class="record-list">
                            {list
                                .into_iter()
                                .map(|record| {
                                    let unread = is_unread(&record);
                                    let buttons = record_id(&record)
                                        .map(|id| {
                                            row_actions(actions, &record, &choices)
                                                .into_iter()
                                                .map(|action| {
                                                    let on_action = on_action.clone();
                                                    view! {
                                                        <button class="btn" on:click=move |_| on_action(id, action)>
                                                            {action_label(action)}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()
                                        });
                                    view! {
                                        <li class="record-card" class:unread=unread>
                                            <h3>{record_heading(&record)}</h3>
                                            {record_detail(&record).map(|text| view! { <p>{text}</p> })}
                                            <dl>
                                                {record_meta(&record)
                                                    .into_iter()
                                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                                    .collect_view()}
                                            </dl>
                                            <div class="record-actions">{buttons}</div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

pub(crate) fn action_label(action: RowAction) -> String {
    match action {
        RowAction::MarkRead => "Mark as read".to_owned(),
        RowAction::SetStatus(status) => format!("Set {}", status.label()),
        RowAction::User(user) => user.label().to_owned(),
    }
}
