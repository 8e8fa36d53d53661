use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::serde::null_as_default;

/// Request envelope delivered by the routing layer (API Gateway proxy shape).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub http_method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_parameters: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_context: ApiRequestContext,
}

/// Subset of the routing layer's per-request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequestContext {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
}

impl ApiRequest {
    /// Returns a path-bound parameter, or `""` when it is absent.
    pub fn path_parameter(&self, name: &str) -> &str {
        self.path_parameters
            .get(name)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Returns the request body, or `""` when there is none.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Response envelope returned to the routing layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub is_base64_encoded: bool,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}
