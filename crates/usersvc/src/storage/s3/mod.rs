//! S3 blob store implementation used to archive raw request payloads.

mod error;
mod store;

pub use store::S3BlobStore;
