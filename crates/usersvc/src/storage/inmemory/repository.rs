//! In-memory repository and blob store implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use usersvc_core::storage::{BlobStore, BlobStoreError, PutReceipt, Result, UserRepository};
use usersvc_core::users::UserRecord;

/// In-memory user record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn put_user(&self, user: &UserRecord) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

/// In-memory blob store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryBlobStore {
    /// Creates a new empty blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the object stored under `key`.
    #[cfg(test)]
    pub async fn get_object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.read().await.get(key).cloned()
    }

    /// Number of stored objects.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
    ) -> std::result::Result<PutReceipt, BlobStoreError> {
        let mut objects = self.objects.write().await;
        objects.insert(key.to_string(), body);
        Ok(PutReceipt {
            key: key.to_string(),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            address: "1 Main St".to_string(),
            email: "a@b.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "555-1212".to_string(),
            created_at: "2024-01-15T10:30:00+00:00".to_string(),
            updated_at: "2024-01-15T10:30:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get_user() {
        let repo = InMemoryRepository::new();
        let user = sample_user("u_abc");

        repo.put_user(&user).await.unwrap();

        assert_eq!(repo.get_user("u_abc").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_user("u_doesnotexist").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_is_last_writer_wins() {
        let repo = InMemoryRepository::new();
        let first = sample_user("u_abc");
        let mut second = sample_user("u_abc");
        second.email = "new@b.com".to_string();

        repo.put_user(&first).await.unwrap();
        repo.put_user(&second).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(
            repo.get_user("u_abc").await.unwrap().unwrap().email,
            "new@b.com"
        );
    }

    #[tokio::test]
    async fn test_blob_store_keeps_bytes_verbatim() {
        let store = InMemoryBlobStore::new();
        let body = br#"{"firstName":"Jane"}"#.to_vec();

        let receipt = store.put_object("Doe,Jane.json", body.clone()).await.unwrap();

        assert_eq!(receipt.key, "Doe,Jane.json");
        assert_eq!(store.get_object("Doe,Jane.json").await, Some(body));
        assert_eq!(store.len().await, 1);
    }
}
