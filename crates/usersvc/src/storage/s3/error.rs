//! S3 error mapping.
//!
//! Maps AWS SDK errors to `BlobStoreError` from `usersvc_core::storage`.

use std::fmt::Debug;

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use usersvc_core::storage::BlobStoreError;

/// Map a PutObject SDK error to BlobStoreError.
pub fn map_put_object_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutObjectError, R>,
    key: &str,
) -> BlobStoreError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            BlobStoreError::ConnectionFailed(format!("PutObject failed: {:?}", err))
        }
        err => BlobStoreError::WriteFailed {
            key: key.to_string(),
            reason: format!("{:?}", err.into_service_error()),
        },
    }
}
