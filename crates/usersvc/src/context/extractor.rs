//! Builds a [`RequestContext`] from the inbound request envelope.

use axum::http::HeaderMap;
use usersvc_core::api::ApiRequest;
use uuid::Uuid;

use super::types::{RequestContext, RequestId};

/// Reads `x-request-id` when it holds a UUID, otherwise generates one.
pub fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(|id| RequestId::from_string(id.to_string()))
        .unwrap_or_default()
}

impl RequestContext {
    /// Context for a request envelope.
    ///
    /// The routing layer's request id is used when present.
    pub fn from_api_request(request: &ApiRequest) -> Self {
        let request_id = match request.request_context.request_id.as_str() {
            "" => RequestId::new(),
            id => RequestId::from_string(id),
        };

        Self {
            request_id,
            path: request.path.clone(),
            method: request.http_method.clone(),
            user_id: request.path_parameter("id").to_string(),
        }
    }

    /// Replaces the request id, e.g. with the invocation id of the runtime.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = RequestId::from_string(request_id);
        self
    }
}
