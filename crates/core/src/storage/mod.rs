mod error;
mod traits;

pub use error::{BlobStoreError, RepositoryError, Result};
pub use traits::{BlobStore, PutReceipt, UserRepository};
