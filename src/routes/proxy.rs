//! Reverse proxy for `/api/*` to the REST backend.
//!
//! The browser talks only to this host, so the backend needs no CORS setup
//! and its address never reaches the client bundle. Only the headers the
//! client actually sends are forwarded; cookies are not.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Backend(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": "backend unavailable" }))).into_response()
    }
}

/// Backend URL for an incoming request, keeping path and query.
pub(crate) fn backend_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or(uri.path(), PathAndQuery::as_str);
    format!("{base}{path_and_query}")
}

/// Subset of `incoming` that is passed on, plus a fresh request id.
pub(crate) fn forwarded_headers(incoming: &HeaderMap, request_id: &str) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [AUTHORIZATION, CONTENT_TYPE, ACCEPT] {
        if let Some(value) = incoming.get(&name) {
            out.insert(name, value.clone());
        }
    }
    if let Ok(value) = HeaderValue::from_str(request_id) {
        out.insert(REQUEST_ID_HEADER, value);
    }
    out
}

/// Forward one request and relay status, content type and body.
///
/// # Errors
///
/// Returns [`ProxyError`] (rendered as 502) when the backend cannot be
/// reached or its body cannot be read.
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request_id = Uuid::new_v4().to_string();
    let url = backend_url(&state.backend_url, &uri);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers, &request_id))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(%method, path = uri.path(), %request_id, error = %e, "backend unreachable"))?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), %request_id, "proxied");

    let mut response = (status, bytes).into_response();
    let response_headers = response.headers_mut();
    response_headers.remove(CONTENT_TYPE);
    if let Some(content_type) = content_type {
        response_headers.insert(CONTENT_TYPE, content_type);
    }
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response_headers.insert(REQUEST_ID_HEADER, value);
    }
    Ok(response)
}
