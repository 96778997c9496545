//! Shared request client that attaches the stored bearer credential.
//!
//! Every page reaches the backend through [`ApiClient::send`]. The client
//! never retries and never looks at the response; a 401 is handed back to
//! the caller like any other status.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{ApiError, ApiRequest, ApiResponse, FetchTransport, Transport};
use super::storage::{Credentials, KeyValueStorage, LocalStorage};

#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    credentials: Credentials<S>,
}

/// The client used in the browser: same-origin `fetch` + `localStorage`.
pub type BrowserClient = ApiClient<FetchTransport, LocalStorage>;

impl BrowserClient {
    pub fn browser() -> Self {
        ApiClient::new(FetchTransport::default(), LocalStorage)
    }
}

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub fn new(transport: T, storage: S) -> Self {
        Self { transport, credentials: Credentials::new(storage) }
    }

    pub fn credentials(&self) -> &Credentials<S> {
        &self.credentials
    }

    /// Attach `Authorization: Bearer <token>` when a credential is stored.
    /// An explicit `Authorization` header on the request wins.
    pub fn authorize(&self, request: ApiRequest) -> ApiRequest {
        if request.authorization().is_some() {
            return request;
        }
        match self.credentials.access_token() {
            Some(token) => request.bearer(&token),
            None => request,
        }
    }

    /// Send with the stored credential attached.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged; non-2xx statuses are not errors here.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.send(self.authorize(request)).await
    }

    /// Send exactly as given, without consulting stored credentials.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged.
    pub async fn send_anonymous(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.send(request).await
    }

    /// `GET` a JSON resource with the stored credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses and
    /// [`ApiError::Decode`] for bodies that do not match `R`.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(ApiRequest::get(path)).await?.error_for_status()?.json()
    }

    /// `POST` a JSON body with the stored credential.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`], plus body serialization failures.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        self.send(ApiRequest::post(path).json(body)?)
            .await?
            .error_for_status()?
            .json()
    }
}
