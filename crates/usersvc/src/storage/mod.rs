//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `UserRepository` and
//! `BlobStore` traits defined in `usersvc_core::storage`.
//!
//! # Feature Flags
//!
//! - `aws` (default): DynamoDB records and S3 payload archive
//!
//! The in-memory backend is always available; it backs the tests and the
//! local server started with `--in-memory`.
//!
//! # Examples
//!
//! Build with AWS backends (default):
//! ```bash
//! cargo build -p usersvc
//! ```
//!
//! Build with the in-memory backend only:
//! ```bash
//! cargo build -p usersvc --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "aws")]
pub mod dynamodb;

#[cfg(feature = "aws")]
pub mod s3;

#[cfg(feature = "aws")]
pub use aws::load_sdk_config;

#[cfg(feature = "aws")]
mod aws {
    use aws_config::{BehaviorVersion, Region, SdkConfig};

    use crate::config::Config;

    /// Loads the shared AWS SDK configuration.
    ///
    /// Honors `AWS_ENDPOINT_URL` so both clients can target a local emulator.
    pub async fn load_sdk_config(config: &Config) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}
