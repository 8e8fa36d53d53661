use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use thiserror::Error;

use usersvc_core::identifier::{generate_user_id, USER_ID_RANDOM_BYTES};
use usersvc_core::storage::{BlobStore, BlobStoreError, RepositoryError, UserRepository};
use usersvc_core::users::{CreateUserResponse, HandlerFailure, UserInput, UserRecord};

use super::{elapsed_ms, SOURCE_BLOB_STORE, SOURCE_DOCUMENT_STORE};
use crate::random::{EntropyError, RandomSource};

/// Errors that end a create-user invocation.
#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("Error unmarshaling data from request: {0}")]
    InvalidInput(#[source] serde_json::Error),
    #[error("Error writing to blob store: {0}")]
    Archive(#[from] BlobStoreError),
    #[error("Error generating random bytes: {0}")]
    Entropy(#[from] EntropyError),
    #[error("Error writing user to document store: {0}")]
    Persist(#[from] RepositoryError),
    #[error("Error creating response: {0}")]
    ResponseSerialization(#[source] serde_json::Error),
}

impl CreateUserError {
    pub fn failure(&self) -> HandlerFailure {
        match self {
            CreateUserError::InvalidInput(_) => HandlerFailure::ClientInput,
            CreateUserError::Archive(_) | CreateUserError::Persist(_) => {
                HandlerFailure::Dependency
            }
            CreateUserError::Entropy(_) => HandlerFailure::Entropy,
            CreateUserError::ResponseSerialization(_) => HandlerFailure::ResponseSerialization,
        }
    }

    /// Name of the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            CreateUserError::InvalidInput(_) => "parse",
            CreateUserError::Archive(_) => "archive",
            CreateUserError::Entropy(_) => "generate_id",
            CreateUserError::Persist(_) => "persist",
            CreateUserError::ResponseSerialization(_) => "respond",
        }
    }
}

/// Parse, archive, assign an identifier, persist.
///
/// The raw body is archived before the record is written and the two writes
/// are independent: if persisting fails the archived blob stays behind.
pub struct CreateUserWorkflow {
    users: Arc<dyn UserRepository>,
    blobs: Arc<dyn BlobStore>,
    random: Arc<dyn RandomSource>,
}

impl CreateUserWorkflow {
    pub fn new(
        users: Arc<dyn UserRepository>,
        blobs: Arc<dyn BlobStore>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            users,
            blobs,
            random,
        }
    }

    /// Runs the workflow for a raw request body.
    pub async fn run(&self, body: &str) -> Result<CreateUserResponse, CreateUserError> {
        let input: UserInput = serde_json::from_str(body).map_err(CreateUserError::InvalidInput)?;

        let archive_key = input.archive_key();
        let start = Instant::now();
        let receipt = self
            .blobs
            .put_object(&archive_key, body.as_bytes().to_vec())
            .await?;
        tracing::info!(
            elapsed_ms = elapsed_ms(start),
            key = %receipt.key,
            e_tag = receipt.e_tag.as_deref().unwrap_or_default(),
            version_id = receipt.version_id.as_deref().unwrap_or_default(),
            operation = "write",
            source = SOURCE_BLOB_STORE,
            "Raw payload archived"
        );

        let user_id = self.assign_id()?;
        tracing::info!(user_id = %user_id, "Created user ID");

        let user = UserRecord::from_input(input, user_id, Utc::now());
        let start = Instant::now();
        if let Err(e) = self.users.put_user(&user).await {
            tracing::warn!(
                key = %archive_key,
                user_id = %user.id,
                "Archived payload has no matching user record"
            );
            return Err(e.into());
        }
        tracing::info!(
            elapsed_ms = elapsed_ms(start),
            user_id = %user.id,
            operation = "write",
            source = SOURCE_DOCUMENT_STORE,
            "User written to document store"
        );

        Ok(CreateUserResponse::created(user.id))
    }

    fn assign_id(&self) -> Result<String, EntropyError> {
        let mut random = [0u8; USER_ID_RANDOM_BYTES];
        self.random.fill(&mut random)?;
        Ok(generate_user_id(&random))
    }
}
