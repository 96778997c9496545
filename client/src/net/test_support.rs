//! Scripted transport for native tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use super::http::{ApiError, ApiRequest, ApiResponse, Transport};

type Hook = Box<dyn FnOnce() + Send>;

/// Replies with queued responses in order and records every request.
/// An empty queue answers with a transport error.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    replies: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
    before_reply: Arc<Mutex<Option<Hook>>>,
}

impl FakeTransport {
    pub(crate) fn push_response(&self, status: u16, body: &str) {
        self.push(Ok(ApiResponse::new(status, body)));
    }

    pub(crate) fn push_json(&self, status: u16, body: &serde_json::Value) {
        self.push_response(status, &body.to_string());
    }

    pub(crate) fn push(&self, reply: Result<ApiResponse, ApiError>) {
        self.replies.lock().unwrap_or_else(PoisonError::into_inner).push_back(reply);
    }

    /// Run `hook` once, between recording the next request and replying.
    pub(crate) fn before_next_reply(&self, hook: impl FnOnce() + Send + 'static) {
        *self.before_reply.lock().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(hook));
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        let hook = self.before_reply.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(hook) = hook {
            hook();
        }
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}
