use super::*;

#[test]
fn header_replaces_case_insensitively() {
    let req = ApiRequest::get("/api/x/").header("authorization", "a").header("Authorization", "b");
    assert_eq!(req.headers.len(), 1);
    assert_eq!(req.authorization(), Some("b"));
}

#[test]
fn bearer_formats_authorization_header() {
    let req = ApiRequest::get("/api/users/me/").bearer("tok");
    assert_eq!(req.authorization(), Some("Bearer tok"));
}

#[test]
fn json_sets_body() {
    let req = ApiRequest::post("/api/users/login/")
        .json(&serde_json::json!({ "email": "a@b.com" }))
        .unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({ "email": "a@b.com" })));
}

#[test]
fn error_for_status_passes_success_through() {
    let resp = ApiResponse::new(201, "{}").error_for_status().unwrap();
    assert_eq!(resp.status, 201);
}

#[test]
fn error_for_status_extracts_drf_detail() {
    let err = ApiResponse::new(401, r#"{"detail":"Given token not valid"}"#)
        .error_for_status()
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.detail(), Some("Given token not valid"));
}

#[test]
fn error_for_status_reads_plain_error_field() {
    let err = ApiResponse::new(404, r#"{"error":"Report not found"}"#)
        .error_for_status()
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), Some("Report not found"));
}

#[test]
fn error_for_status_prefers_detail_over_error() {
    let err = ApiResponse::new(403, r#"{"detail":"Forbidden.","error":"Forbidden"}"#)
        .error_for_status()
        .unwrap_err();
    assert_eq!(err.detail(), Some("Forbidden."));
}

#[test]
fn error_for_status_tolerates_non_json_body() {
    let err = ApiResponse::new(502, "Bad Gateway").error_for_status().unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
}

#[test]
fn json_decode_failure_is_decode_error() {
    let err = ApiResponse::new(200, "not json").json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn fetch_transport_joins_base_and_path() {
    let transport = FetchTransport::new("http://localhost:3000/");
    assert_eq!(transport.url_for("/api/users/me/"), "http://localhost:3000/api/users/me/");
    assert_eq!(FetchTransport::default().url_for("/api/x/"), "/api/x/");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_transport_is_unavailable_off_browser() {
    let result = futures::executor::block_on(FetchTransport::default().send(ApiRequest::get("/api/x/")));
    assert_eq!(result, Err(ApiError::Unavailable));
}
