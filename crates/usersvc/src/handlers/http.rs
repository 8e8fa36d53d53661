//! Axum adapters for the local server.
//!
//! Each route converts the incoming HTTP request into the same envelope the
//! Lambda runtime delivers and converts the envelope response back.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use usersvc_core::api::{ApiRequest, ApiRequestContext, ApiResponse, Reply};
use usersvc_core::users::HandlerFailure;

use crate::{context::extract_request_id, handlers::users, state::AppState};

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body = match String::from_utf8(body.to_vec()) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Request body is not valid UTF-8");
            return into_http_response(users::failure_response(
                HandlerFailure::ClientInput,
                Reply::CreateUser,
            ));
        }
    };
    let request = api_request(method, &uri, &headers, BTreeMap::new(), Some(body));
    into_http_response(users::create_user(&state, &request).await)
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let path_parameters = BTreeMap::from([("id".to_string(), id)]);
    let request = api_request(method, &uri, &headers, path_parameters, None);
    into_http_response(users::get_user(&state, &request).await)
}

fn api_request(
    method: Method,
    uri: &Uri,
    headers: &HeaderMap,
    path_parameters: BTreeMap<String, String>,
    body: Option<String>,
) -> ApiRequest {
    ApiRequest {
        http_method: method.to_string(),
        path: uri.path().to_string(),
        path_parameters,
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
        body,
        request_context: ApiRequestContext {
            request_id: extract_request_id(headers).to_string(),
        },
    }
}

/// Converts an envelope response into an HTTP response.
///
/// Headers that are not valid HTTP header names or values are dropped.
pub fn into_http_response(response: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }

    (status, headers, response.body).into_response()
}
