//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `UserRepository`
//! using `aws-sdk-dynamodb`. The table has a single string partition key, `id`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
