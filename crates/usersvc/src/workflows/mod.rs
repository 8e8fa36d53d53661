//! The create-user and get-user workflows.
//!
//! Each workflow runs its steps strictly in sequence and stops at the first
//! failure. Nothing is retried. Callers map the returned error to a response
//! through [`usersvc_core::users::failure_status_code`].

mod create;
mod get;

pub use create::{CreateUserError, CreateUserWorkflow};
pub use get::{GetUserError, GetUserWorkflow};

/// Backend name recorded on document store events.
pub(crate) const SOURCE_DOCUMENT_STORE: &str = "dynamodb";
/// Backend name recorded on blob store events.
pub(crate) const SOURCE_BLOB_STORE: &str = "s3";

pub(crate) fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
