//! Create-user and get-user handlers over the request envelope.
//!
//! Both entry points (the local axum server and the Lambda runtime) convert
//! their input into an [`ApiRequest`] and call these functions, so response
//! shape and status codes are identical across them.

use std::time::Instant;

use tracing::Instrument;

use usersvc_core::api::{ApiRequest, ApiResponse, Reply};
use usersvc_core::users::{
    failure_message, failure_status_code, GetUserResponse, HandlerFailure,
};

use crate::context::RequestContext;
use crate::state::AppState;
use crate::workflows::{CreateUserError, GetUserError};

/// Handles a create-user request. Answers 201 with `{"id", "message"}`.
pub async fn create_user(state: &AppState, request: &ApiRequest) -> ApiResponse {
    let ctx = RequestContext::from_api_request(request);
    create_user_in(state, request, ctx).await
}

/// Handles a get-user request. Answers 200 with `{"user": {...}}`.
///
/// An unknown id still answers 200, with every field of the user empty.
pub async fn get_user(state: &AppState, request: &ApiRequest) -> ApiResponse {
    let ctx = RequestContext::from_api_request(request);
    get_user_in(state, request, ctx).await
}

pub(crate) async fn create_user_in(
    state: &AppState,
    request: &ApiRequest,
    ctx: RequestContext,
) -> ApiResponse {
    let span = ctx.span();
    async move {
        let start = Instant::now();
        tracing::info!("Starting create user handler");

        let result = state
            .create_workflow()
            .run(request.body())
            .await
            .and_then(|created| {
                ApiResponse::json(201, &created, Reply::CreateUser)
                    .map_err(CreateUserError::ResponseSerialization)
            });

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, step = e.step(), "Create user failed");
                failure_response(e.failure(), Reply::CreateUser)
            }
        };

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            status = response.status_code,
            "Create user handler complete"
        );
        response
    }
    .instrument(span)
    .await
}

pub(crate) async fn get_user_in(
    state: &AppState,
    request: &ApiRequest,
    ctx: RequestContext,
) -> ApiResponse {
    let span = ctx.span();
    async move {
        let start = Instant::now();
        tracing::info!("Starting get user handler");

        let result = state
            .get_workflow()
            .run(request.path_parameter("id"))
            .await
            .and_then(|lookup| {
                let body = GetUserResponse {
                    user: lookup.into_record(),
                };
                ApiResponse::json(200, &body, Reply::GetUser)
                    .map_err(GetUserError::ResponseSerialization)
            });

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, step = e.step(), "Get user failed");
                failure_response(e.failure(), Reply::GetUser)
            }
        };

        tracing::info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            status = response.status_code,
            "Get user handler complete"
        );
        response
    }
    .instrument(span)
    .await
}

/// Error envelope for a failure class. The detailed error is only logged.
pub(crate) fn failure_response(failure: HandlerFailure, reply: Reply) -> ApiResponse {
    ApiResponse::error(
        failure_status_code(failure),
        failure_message(failure),
        reply,
    )
}
