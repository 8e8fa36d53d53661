//! Lambda runtime entry point.
//!
//! One deployed function serves one handler. The payload is the API Gateway
//! proxy event; the response is always an envelope, never a runtime error.

use std::sync::Arc;

use aws_config::SdkConfig;
use clap::ValueEnum;
use lambda_runtime::{service_fn, Error, LambdaEvent};

use usersvc_core::api::{ApiRequest, ApiResponse};

use crate::{config::Config, context::RequestContext, handlers::users, state::AppState};

/// Which handler a Lambda function runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LambdaHandler {
    /// Create a user (POST /users).
    Create,
    /// Get a user by id (GET /users/{id}).
    Get,
}

/// Runs the Lambda event loop until the runtime shuts the function down.
pub async fn run(handler: LambdaHandler, sdk_config: SdkConfig) -> Result<(), Error> {
    tracing::info!(?handler, "Starting Lambda runtime");

    let sdk_config = Arc::new(sdk_config);
    lambda_runtime::run(service_fn(move |event: LambdaEvent<ApiRequest>| {
        let sdk_config = Arc::clone(&sdk_config);
        async move {
            let (request, context) = event.into_parts();
            // Store names are read per invocation.
            let config = Config::from_env();
            let state = AppState::aws(&sdk_config, &config);
            Ok::<ApiResponse, Error>(dispatch(handler, &state, &request, context.request_id).await)
        }
    }))
    .await
}

async fn dispatch(
    handler: LambdaHandler,
    state: &AppState,
    request: &ApiRequest,
    invocation_id: String,
) -> ApiResponse {
    let ctx = RequestContext::from_api_request(request).with_request_id(invocation_id);
    match handler {
        LambdaHandler::Create => users::create_user_in(state, request, ctx).await,
        LambdaHandler::Get => users::get_user_in(state, request, ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_gateway_events() {
        let state = AppState::in_memory();
        let create: ApiRequest = serde_json::from_str(
            r#"{
                "httpMethod": "POST",
                "path": "/users",
                "pathParameters": null,
                "body": "{\"firstName\":\"Jane\",\"lastName\":\"Doe\"}",
                "requestContext": {"requestId": "gw-1"}
            }"#,
        )
        .unwrap();

        let created = dispatch(LambdaHandler::Create, &state, &create, "inv-1".to_string()).await;
        assert_eq!(created.status_code, 201);

        let created: serde_json::Value = serde_json::from_str(&created.body).unwrap();
        let id = created["id"].as_str().unwrap();
        let get: ApiRequest = serde_json::from_value(serde_json::json!({
            "httpMethod": "GET",
            "path": format!("/users/{id}"),
            "pathParameters": {"id": id},
        }))
        .unwrap();

        let fetched = dispatch(LambdaHandler::Get, &state, &get, "inv-2".to_string()).await;
        assert_eq!(fetched.status_code, 200);

        let response = serde_json::to_value(&fetched).unwrap();
        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["isBase64Encoded"], false);
        assert_eq!(response["headers"]["X-MyCompany-Func-Reply"], "users-get-handler");
    }

    #[test]
    fn test_handler_names() {
        assert_eq!(
            LambdaHandler::from_str("create", true),
            Ok(LambdaHandler::Create)
        );
        assert_eq!(LambdaHandler::from_str("get", true), Ok(LambdaHandler::Get));
    }
}
