use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use usersvc_core::storage::{RepositoryError, UserRepository};
use usersvc_core::users::{HandlerFailure, UserLookup};

use super::{elapsed_ms, SOURCE_DOCUMENT_STORE};

/// Errors that end a get-user invocation.
#[derive(Debug, Error)]
pub enum GetUserError {
    #[error("Error reading user from document store: {0}")]
    Lookup(#[source] RepositoryError),
    #[error("Error converting stored item to user: {0}")]
    Decode(#[source] RepositoryError),
    #[error("Error creating response: {0}")]
    ResponseSerialization(#[source] serde_json::Error),
}

impl From<RepositoryError> for GetUserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serialization(_) => GetUserError::Decode(err),
            _ => GetUserError::Lookup(err),
        }
    }
}

impl GetUserError {
    pub fn failure(&self) -> HandlerFailure {
        match self {
            GetUserError::Lookup(_) => HandlerFailure::Dependency,
            GetUserError::Decode(_) | GetUserError::ResponseSerialization(_) => {
                HandlerFailure::RecordDeserialization
            }
        }
    }

    /// Name of the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            GetUserError::Lookup(_) => "lookup",
            GetUserError::Decode(_) => "decode",
            GetUserError::ResponseSerialization(_) => "respond",
        }
    }
}

/// Single-key lookup of a user record.
pub struct GetUserWorkflow {
    users: Arc<dyn UserRepository>,
}

impl GetUserWorkflow {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Looks up `id` as given. An empty id is looked up like any other.
    pub async fn run(&self, id: &str) -> Result<UserLookup, GetUserError> {
        let start = Instant::now();
        let user = self.users.get_user(id).await?;
        tracing::info!(
            elapsed_ms = elapsed_ms(start),
            user_id = %id,
            operation = "read",
            source = SOURCE_DOCUMENT_STORE,
            "User read from document store"
        );

        let lookup = UserLookup::from(user);
        if !lookup.is_found() {
            tracing::warn!(user_id = %id, "User not found");
        }
        Ok(lookup)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use usersvc_core::users::UserRecord;

    use super::*;
    use crate::storage::inmemory::InMemoryRepository;

    struct FailingRepository(fn() -> RepositoryError);

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn get_user(&self, _id: &str) -> usersvc_core::storage::Result<Option<UserRecord>> {
            Err((self.0)())
        }

        async fn put_user(&self, _user: &UserRecord) -> usersvc_core::storage::Result<()> {
            Ok(())
        }
    }

    fn stored_user() -> UserRecord {
        UserRecord {
            id: "u_abc".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            created_at: "2024-01-15T10:30:00+00:00".to_string(),
            updated_at: "2024-01-15T10:30:00+00:00".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_get_existing_user() {
        let repo = InMemoryRepository::new();
        repo.put_user(&stored_user()).await.unwrap();
        let wf = GetUserWorkflow::new(Arc::new(repo));

        let lookup = wf.run("u_abc").await.unwrap();

        assert_eq!(lookup, UserLookup::Found(stored_user()));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let wf = GetUserWorkflow::new(Arc::new(InMemoryRepository::new()));

        let lookup = wf.run("u_doesnotexist").await.unwrap();

        assert_eq!(lookup, UserLookup::NotFound);
        assert_eq!(lookup.into_record(), UserRecord::default());
    }

    #[tokio::test]
    async fn test_get_with_empty_id_is_not_found() {
        let wf = GetUserWorkflow::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(wf.run("").await.unwrap(), UserLookup::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_dependency_failure() {
        let wf = GetUserWorkflow::new(Arc::new(FailingRepository(|| {
            RepositoryError::ConnectionFailed("timeout".to_string())
        })));

        let err = wf.run("u_abc").await.unwrap_err();

        assert!(matches!(err, GetUserError::Lookup(_)));
        assert_eq!(err.failure(), HandlerFailure::Dependency);
    }

    #[test]
    fn test_repository_errors_split_into_lookup_and_decode() {
        let query = GetUserError::from(RepositoryError::QueryFailed("Table not found".to_string()));
        let connection = GetUserError::from(RepositoryError::ConnectionFailed("timeout".to_string()));
        let decode = GetUserError::from(RepositoryError::Serialization("bad".to_string()));

        assert_eq!(query.step(), "lookup");
        assert_eq!(connection.step(), "lookup");
        assert_eq!(decode.step(), "decode");
    }

    #[tokio::test]
    async fn test_decode_failure_is_record_deserialization() {
        let wf = GetUserWorkflow::new(Arc::new(FailingRepository(|| {
            RepositoryError::Serialization("Field email is not a string".to_string())
        })));

        let err = wf.run("u_abc").await.unwrap_err();

        assert!(matches!(err, GetUserError::Decode(_)));
        assert_eq!(err.failure(), HandlerFailure::RecordDeserialization);
        assert_eq!(err.step(), "decode");
    }
}
