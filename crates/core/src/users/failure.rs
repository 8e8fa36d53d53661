//! Pure functions for mapping handler failures to HTTP status codes.
//!
//! The codes reproduce the behavior clients already depend on. Two of them are
//! known to be miscategorized and are kept on purpose:
//!
//! - backend failures answer 400 even though they are not client faults
//! - a create response that fails to serialize answers 404 instead of a 5xx

/// Classification of a failed create or get invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerFailure {
    /// The request body could not be decoded.
    ClientInput,
    /// The blob store or the document store call failed.
    Dependency,
    /// The secure random source failed.
    Entropy,
    /// The success response body could not be serialized.
    ResponseSerialization,
    /// A stored item could not be converted into a user record.
    RecordDeserialization,
}

/// Maps a [`HandlerFailure`] to an HTTP status code.
///
/// - `ClientInput` -> 400
/// - `Dependency` -> 400
/// - `Entropy` -> 400
/// - `ResponseSerialization` -> 404
/// - `RecordDeserialization` -> 500
///
/// # Examples
///
/// ```
/// use usersvc_core::users::{failure_status_code, HandlerFailure};
///
/// assert_eq!(failure_status_code(HandlerFailure::RecordDeserialization), 500);
/// ```
pub fn failure_status_code(failure: HandlerFailure) -> u16 {
    match failure {
        HandlerFailure::ClientInput => 400,
        HandlerFailure::Dependency => 400,
        HandlerFailure::Entropy => 400,
        HandlerFailure::ResponseSerialization => 404,
        HandlerFailure::RecordDeserialization => 500,
    }
}

/// Client-facing message for a [`HandlerFailure`].
///
/// The message depends only on the class, so backend details never reach the
/// response body.
pub fn failure_message(failure: HandlerFailure) -> &'static str {
    match failure {
        HandlerFailure::ClientInput => "Error unmarshaling data from request",
        HandlerFailure::Dependency => "Error communicating with storage",
        HandlerFailure::Entropy => "Error generating user ID",
        HandlerFailure::ResponseSerialization => "Error creating response",
        HandlerFailure::RecordDeserialization => "Error reading user record",
    }
}
