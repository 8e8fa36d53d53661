//! Response construction.
//!
//! Every response carries a JSON content type and the reply header naming the
//! handler that produced it. Bodies are HTML-escaped JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ApiResponse;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const REPLY_HEADER: &str = "X-MyCompany-Func-Reply";

/// Identifies which handler produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    CreateUser,
    GetUser,
}

impl Reply {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reply::CreateUser => "users-create-handler",
            Reply::GetUser => "users-get-handler",
        }
    }
}

impl ApiResponse {
    /// Builds a response whose body is `body` serialized as JSON.
    pub fn json<T: Serialize>(
        status_code: u16,
        body: &T,
        reply: Reply,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(body)?;
        Ok(Self::with_body(status_code, html_escape_json(&body), reply))
    }

    /// Builds an error response with a `{"message": ...}` body.
    pub fn error(status_code: u16, message: impl Into<String>, reply: Reply) -> Self {
        let body = serde_json::json!({ "message": message.into() }).to_string();
        Self::with_body(status_code, html_escape_json(&body), reply)
    }

    fn with_body(status_code: u16, body: String, reply: Reply) -> Self {
        Self {
            status_code,
            is_base64_encoded: false,
            body,
            headers: default_headers(reply),
        }
    }
}

fn default_headers(reply: Reply) -> BTreeMap<String, String> {
    BTreeMap::from([
        (CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string()),
        (REPLY_HEADER.to_string(), reply.as_str().to_string()),
    ])
}

/// Escapes characters in serialized JSON that are unsafe inside HTML.
///
/// `<`, `>`, `&`, U+2028 and U+2029 can only occur inside JSON strings, so the
/// `\uXXXX` replacement keeps the document equivalent.
pub fn html_escape_json(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}
