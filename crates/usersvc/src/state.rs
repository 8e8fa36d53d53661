//! Application state with trait-object storage.
//!
//! `AppState` bundles the two storage capabilities and the random source a
//! workflow needs. It holds no per-request data and no mutable state of its
//! own, so each invocation is independent.

use std::sync::Arc;

use usersvc_core::storage::{BlobStore, UserRepository};

use crate::random::{OsRandom, RandomSource};
use crate::storage::inmemory::{InMemoryBlobStore, InMemoryRepository};
use crate::workflows::{CreateUserWorkflow, GetUserWorkflow};

#[cfg(feature = "aws")]
use crate::{
    config::Config,
    storage::{dynamodb::DynamoDbRepository, s3::S3BlobStore},
};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Document store for user records.
    pub user_repo: Arc<dyn UserRepository>,
    /// Blob store for raw request payloads.
    pub blob_store: Arc<dyn BlobStore>,
    /// Entropy for identifier generation.
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        blob_store: Arc<dyn BlobStore>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            user_repo,
            blob_store,
            random,
        }
    }

    /// State backed by empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryBlobStore::new()),
            Arc::new(OsRandom),
        )
    }

    /// State backed by DynamoDB and S3.
    ///
    /// Builds fresh client handles from the shared SDK configuration and the
    /// table and bucket names in `config`.
    #[cfg(feature = "aws")]
    pub fn aws(sdk_config: &aws_config::SdkConfig, config: &Config) -> Self {
        let dynamodb = aws_sdk_dynamodb::Client::new(sdk_config);

        // Path-style addressing keeps bucket names out of the host for local emulators.
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(config.aws_endpoint_url.is_some())
            .build();
        let s3 = aws_sdk_s3::Client::from_conf(s3_config);

        tracing::debug!(
            table = %config.table_name,
            bucket = %config.bucket_name,
            "Created AWS storage clients"
        );

        Self::new(
            Arc::new(DynamoDbRepository::new(dynamodb, &config.table_name)),
            Arc::new(S3BlobStore::new(s3, &config.bucket_name)),
            Arc::new(OsRandom),
        )
    }

    pub fn create_workflow(&self) -> CreateUserWorkflow {
        CreateUserWorkflow::new(
            Arc::clone(&self.user_repo),
            Arc::clone(&self.blob_store),
            Arc::clone(&self.random),
        )
    }

    pub fn get_workflow(&self) -> GetUserWorkflow {
        GetUserWorkflow::new(Arc::clone(&self.user_repo))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
