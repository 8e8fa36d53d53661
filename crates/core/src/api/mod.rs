//! Request and response envelopes exchanged with the routing layer.

mod response;
mod types;

pub use response::{
    html_escape_json, Reply, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON, REPLY_HEADER,
};
pub use types::{ApiRequest, ApiRequestContext, ApiResponse};
