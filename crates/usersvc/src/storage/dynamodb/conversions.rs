//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! `UserRecord`. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use usersvc_core::storage::RepositoryError;
use usersvc_core::users::UserRecord;

pub const ATTR_ID: &str = "id";
pub const ATTR_ADDRESS: &str = "address";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_FIRST_NAME: &str = "firstName";
pub const ATTR_LAST_NAME: &str = "lastName";
pub const ATTR_PHONE: &str = "phone";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Convert a UserRecord to a DynamoDB item.
pub fn user_to_item(user: &UserRecord) -> HashMap<String, AttributeValue> {
    [
        (ATTR_ID, &user.id),
        (ATTR_ADDRESS, &user.address),
        (ATTR_EMAIL, &user.email),
        (ATTR_FIRST_NAME, &user.first_name),
        (ATTR_LAST_NAME, &user.last_name),
        (ATTR_PHONE, &user.phone_number),
        (ATTR_CREATED_AT, &user.created_at),
        (ATTR_UPDATED_AT, &user.updated_at),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), AttributeValue::S(value.clone())))
    .collect()
}

/// Convert a DynamoDB item to a UserRecord.
///
/// Absent attributes become empty strings; an attribute of another type is an error.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<UserRecord, RepositoryError> {
    Ok(UserRecord {
        id: get_string_or_empty(item, ATTR_ID)?,
        address: get_string_or_empty(item, ATTR_ADDRESS)?,
        email: get_string_or_empty(item, ATTR_EMAIL)?,
        first_name: get_string_or_empty(item, ATTR_FIRST_NAME)?,
        last_name: get_string_or_empty(item, ATTR_LAST_NAME)?,
        phone_number: get_string_or_empty(item, ATTR_PHONE)?,
        created_at: get_string_or_empty(item, ATTR_CREATED_AT)?,
        updated_at: get_string_or_empty(item, ATTR_UPDATED_AT)?,
    })
}

/// Get a string attribute, defaulting to empty when absent or NULL.
fn get_string_or_empty(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(String::new()),
        Some(value) => value.as_s().map(|s| s.to_string()).map_err(|_| {
            RepositoryError::Serialization(format!("Field {} is not a string", key))
        }),
    }
}
