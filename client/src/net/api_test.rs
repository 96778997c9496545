use futures::executor::block_on;

use super::*;
use crate::net::http::Method;
use crate::net::storage::{ACCESS_TOKEN_KEY, MemoryStorage};
use crate::net::test_support::FakeTransport;
use crate::net::types::{AccountDecision, ReportCategory, ReportStatus, Role};

fn client() -> (ApiClient<FakeTransport, MemoryStorage>, FakeTransport, MemoryStorage) {
    let storage = MemoryStorage::default();
    let transport = FakeTransport::default();
    (ApiClient::new(transport.clone(), storage.clone()), transport, storage)
}

#[test]
fn notification_read_endpoint_formats_expected_path() {
    assert_eq!(notification_read_endpoint(12), "/api/notifications/12/update/");
}

#[test]
fn fetch_current_user_uses_stored_bearer() {
    let (client, transport, storage) = client();
    storage.set_item(ACCESS_TOKEN_KEY, "tok");
    transport.push_json(
        200,
        &serde_json::json!({ "id": 1, "email": "a@b.com", "role": "citizen", "status": "approved" }),
    );

    let user = block_on(fetch_current_user(&client)).unwrap();
    assert_eq!(user.email, "a@b.com");
    let sent = transport.sent();
    assert_eq!(sent[0].path, ME_ENDPOINT);
    assert_eq!(sent[0].authorization(), Some("Bearer tok"));
}

#[test]
fn fetch_user_with_token_overrides_stored_bearer() {
    let (client, transport, storage) = client();
    storage.set_item(ACCESS_TOKEN_KEY, "old");
    transport.push_json(
        200,
        &serde_json::json!({ "id": 1, "email": "a@b.com", "role": "admin", "status": "approved" }),
    );

    block_on(fetch_user_with_token(&client, "new")).unwrap();
    assert_eq!(transport.sent()[0].authorization(), Some("Bearer new"));
}

#[test]
fn obtain_tokens_posts_credentials_without_bearer() {
    let (client, transport, storage) = client();
    storage.set_item(ACCESS_TOKEN_KEY, "stale");
    transport.push_json(200, &serde_json::json!({ "access": "acc", "refresh": "ref" }));

    let pair = block_on(obtain_tokens(&client, "a@b.com", "pw")).unwrap();
    assert_eq!(pair.access, "acc");
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, LOGIN_ENDPOINT);
    assert_eq!(sent[0].authorization(), None);
    assert_eq!(sent[0].body, Some(serde_json::json!({ "email": "a@b.com", "password": "pw" })));
}

#[test]
fn obtain_tokens_surfaces_rejection() {
    let (client, transport, _) = client();
    transport.push_response(401, r#"{"detail":"No active account found with the given credentials"}"#);
    let err = block_on(obtain_tokens(&client, "a@b.com", "bad")).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn register_posts_to_create_endpoint() {
    let (client, transport, _) = client();
    transport.push_response(201, "{}");
    let request = RegistrationRequest {
        email: "c@d.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Citizen,
        rank: None,
        details: None,
    };
    block_on(register(&client, &request)).unwrap();
    assert_eq!(transport.sent()[0].path, REGISTER_ENDPOINT);
}

#[test]
fn submit_report_posts_with_bearer() {
    let (client, transport, storage) = client();
    storage.set_item(ACCESS_TOKEN_KEY, "tok");
    transport.push_response(201, r#"{"id":3}"#);
    let report = NewReport {
        category: ReportCategory::Theft,
        description: "bike stolen".to_owned(),
        latitude: 1.5,
        longitude: -2.25,
    };
    let created = block_on(submit_report(&client, &report)).unwrap();
    assert_eq!(created["id"], 3);
    let sent = transport.sent();
    assert_eq!(sent[0].path, REPORTS_ENDPOINT);
    assert_eq!(sent[0].body.as_ref().unwrap()["category"], "theft");
}

#[test]
fn fetch_records_requires_array_body() {
    let (client, transport, _) = client();
    transport.push_response(200, r#"{"not":"a list"}"#);
    let err = block_on(fetch_records(&client, REPORTS_ENDPOINT)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn mark_notification_read_patches_flag() {
    let (client, transport, _) = client();
    transport.push_response(200, "{}");
    block_on(mark_notification_read(&client, 9)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].body, Some(serde_json::json!({ "is_read": true })));
}

#[test]
fn update_report_status_patches_report_with_bearer() {
    let (client, transport, storage) = client();
    storage.set_item(ACCESS_TOKEN_KEY, "officer");
    transport.push_json(200, &serde_json::json!({ "id": 4, "status": "in_progress" }));

    block_on(update_report_status(&client, 4, ReportStatus::InProgress)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].path, "/api/reports/4/");
    assert_eq!(sent[0].authorization(), Some("Bearer officer"));
    assert_eq!(sent[0].body, Some(serde_json::json!({ "status": "in_progress" })));
}

#[test]
fn update_report_status_surfaces_plain_error_body() {
    let (client, transport, _) = client();
    transport.push_response(404, r#"{"error":"Report not found"}"#);
    let err = block_on(update_report_status(&client, 99, ReportStatus::Resolved)).unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Report not found"));
}

#[test]
fn status_choices_skip_unknown_values() {
    let (client, transport, _) = client();
    transport.push_json(
        200,
        &serde_json::json!([
            { "value": "pending", "label": "Pending" },
            { "value": "archived", "label": "Archived" },
            { "value": "resolved", "label": "Resolved" },
        ]),
    );
    let choices = block_on(fetch_report_status_choices(&client)).unwrap();
    assert_eq!(choices, vec![ReportStatus::Pending, ReportStatus::Resolved]);
    assert_eq!(transport.sent()[0].path, REPORT_STATUS_CHOICES_ENDPOINT);
}

#[test]
fn update_user_role_patches_user() {
    let (client, transport, _) = client();
    transport.push_response(200, r#"{"message":"User role updated to law_enforcement"}"#);
    block_on(update_user_role(&client, 12, Role::LawEnforcement)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].path, "/api/users/12/");
    assert_eq!(sent[0].body, Some(serde_json::json!({ "role": "law_enforcement" })));
}

#[test]
fn decide_account_posts_action() {
    let (client, transport, _) = client();
    transport.push_response(200, r#"{"message":"Law enforcement user approved successfully."}"#);
    block_on(decide_account(&client, 5, AccountDecision::Approve)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/api/users/5/approve/");
    assert_eq!(sent[0].body, Some(serde_json::json!({ "action": "approve" })));
}

#[test]
fn decide_account_reports_backend_message() {
    let (client, transport, _) = client();
    transport.push_response(400, r#"{"message":"This user is not a law enforcement officer."}"#);
    let err = block_on(decide_account(&client, 5, AccountDecision::Reject)).unwrap_err();
    assert_eq!(err.detail(), Some("This user is not a law enforcement officer."));
}
