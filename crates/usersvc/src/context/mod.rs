//! Request-scoped context module.
//!
//! Provides `RequestContext`, the request-scoped counterpart to the
//! application-scoped `AppState`.

mod extractor;
mod types;

pub use extractor::extract_request_id;
pub use types::RequestContext;
