use async_trait::async_trait;

use crate::users::UserRecord;

use super::{BlobStoreError, Result};

/// Document store holding the canonical user records, keyed by `id`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their identifier. A missing item is `Ok(None)`.
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>>;

    /// Writes a user unconditionally, replacing any item with the same id.
    async fn put_user(&self, user: &UserRecord) -> Result<()>;
}

/// Backend descriptor returned by a successful blob write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutReceipt {
    pub key: String,
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
}

/// Blob store used to archive raw request payloads.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `body` verbatim under `key`.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
    ) -> std::result::Result<PutReceipt, BlobStoreError>;
}
