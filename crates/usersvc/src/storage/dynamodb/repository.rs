//! DynamoDB repository implementation.
//!
//! Implements `UserRepository` from `usersvc_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use usersvc_core::storage::{Result, UserRepository};
use usersvc_core::users::UserRecord;

use super::conversions::{item_to_user, user_to_item, ATTR_ID};
use super::error::{map_get_item_error, map_put_item_error};

/// DynamoDB-based user repository.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) if !item.is_empty() => Ok(Some(item_to_user(&item)?)),
            _ => Ok(None),
        }
    }

    async fn put_user(&self, user: &UserRecord) -> Result<()> {
        let item = user_to_item(user);

        // No condition expression: an item with the same id is replaced.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
