use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Fields submitted by a client when creating a user.
///
/// Nothing is validated beyond structural decoding. Decoding follows the
/// rules clients already rely on:
///
/// - keys match field names case-insensitively (`FirstName` fills `first_name`)
/// - a repeated key keeps its last value
/// - absent or `null` fields stay empty, and a `null` body is an empty input
/// - unknown keys are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub address: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "phone")]
    pub phone_number: String,
}

impl UserInput {
    /// Key under which the raw request body is archived: `<lastName>,<firstName>.json`.
    pub fn archive_key(&self) -> String {
        format!("{},{}.json", self.last_name, self.first_name)
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key.to_lowercase().as_str() {
            "address" => Some(&mut self.address),
            "email" => Some(&mut self.email),
            "firstname" => Some(&mut self.first_name),
            "lastname" => Some(&mut self.last_name),
            "phone" => Some(&mut self.phone_number),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for UserInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(UserInputVisitor)
    }
}

struct UserInputVisitor;

impl<'de> Visitor<'de> for UserInputVisitor {
    type Value = UserInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object of user fields or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<UserInput, E> {
        Ok(UserInput::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<UserInput, E> {
        Ok(UserInput::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<UserInput, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<UserInput, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = UserInput::default();
        while let Some(key) = map.next_key::<String>()? {
            match input.field_mut(&key) {
                // `null` leaves the current value in place.
                Some(field) => {
                    if let Some(value) = map.next_value::<Option<String>>()? {
                        *field = value;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(input)
    }
}

/// The canonical stored user.
///
/// Timestamps are kept as the strings written at creation time and are never
/// re-parsed on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: String,
    pub address: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "phone")]
    pub phone_number: String,
    pub created_at: String,
    pub updated_at: String,
}

impl UserRecord {
    /// Builds a new record from client input and an assigned identifier.
    ///
    /// `created_at` and `updated_at` are the same instant.
    pub fn from_input(input: UserInput, id: impl Into<String>, now: DateTime<Utc>) -> Self {
        let timestamp = now.to_rfc3339();
        Self {
            id: id.into(),
            address: input.address,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            phone_number: input.phone_number,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }
}

/// Body of a successful create-user response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
    pub message: String,
}

/// Confirmation message returned by create-user.
pub const USER_CREATED_MESSAGE: &str = "User created successfully!";

impl CreateUserResponse {
    pub fn created(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: USER_CREATED_MESSAGE.to_string(),
        }
    }
}

/// Body of a get-user response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: UserRecord,
}

/// Outcome of a single-key user lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Found(UserRecord),
    NotFound,
}

impl UserLookup {
    /// Collapses the lookup into the record shape served to clients.
    ///
    /// A missing user becomes the all-empty record.
    pub fn into_record(self) -> UserRecord {
        match self {
            UserLookup::Found(user) => user,
            UserLookup::NotFound => UserRecord::default(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, UserLookup::Found(_))
    }
}

impl From<Option<UserRecord>> for UserLookup {
    fn from(value: Option<UserRecord>) -> Self {
        match value {
            Some(user) => UserLookup::Found(user),
            None => UserLookup::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> UserInput {
        UserInput {
            address: "1 Main St".to_string(),
            email: "a@b.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "555-1212".to_string(),
        }
    }

    #[test]
    fn test_user_input_decodes_wire_names() {
        let body = r#"{"address":"1 Main St","email":"a@b.com","firstName":"Jane","lastName":"Doe","phone":"555-1212"}"#;
        let input: UserInput = serde_json::from_str(body).unwrap();
        assert_eq!(input, sample_input());
    }

    #[test]
    fn test_user_input_missing_and_unknown_fields() {
        let input: UserInput = serde_json::from_str(r#"{"firstName":"Jane","age":31}"#).unwrap();
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.last_name, "");
        assert_eq!(input.phone_number, "");
    }

    #[test]
    fn test_user_input_null_fields_become_empty() {
        let input: UserInput = serde_json::from_str(r#"{"email":null,"lastName":"Doe"}"#).unwrap();
        assert_eq!(input.email, "");
        assert_eq!(input.last_name, "Doe");
    }

    #[test]
    fn test_user_input_keys_match_ignoring_case() {
        let input: UserInput =
            serde_json::from_str(r#"{"FirstName":"Jane","LASTNAME":"Doe","Phone":"555-1212"}"#)
                .unwrap();

        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.last_name, "Doe");
        assert_eq!(input.phone_number, "555-1212");
        assert_eq!(input.archive_key(), "Doe,Jane.json");
    }

    #[test]
    fn test_user_input_repeated_key_keeps_last_value() {
        let input: UserInput =
            serde_json::from_str(r#"{"firstName":"Jane","firstName":"Janet","firstname":"Jo"}"#)
                .unwrap();
        assert_eq!(input.first_name, "Jo");

        let input: UserInput =
            serde_json::from_str(r#"{"email":"a@b.com","email":null}"#).unwrap();
        assert_eq!(input.email, "a@b.com");
    }

    #[test]
    fn test_user_input_null_body_is_empty_input() {
        let input: UserInput = serde_json::from_str("null").unwrap();
        assert_eq!(input, UserInput::default());
        assert_eq!(input.archive_key(), ",.json");
    }

    #[test]
    fn test_user_input_unknown_nested_values_are_skipped() {
        let input: UserInput =
            serde_json::from_str(r#"{"tags":["a",{"b":1}],"lastName":"Doe"}"#).unwrap();
        assert_eq!(input.last_name, "Doe");
    }

    #[test]
    fn test_user_input_rejects_non_string_field() {
        assert!(serde_json::from_str::<UserInput>(r#"{"email":42}"#).is_err());
        assert!(serde_json::from_str::<UserInput>("not json").is_err());
        assert!(serde_json::from_str::<UserInput>("[1,2]").is_err());
    }

    #[test]
    fn test_archive_key() {
        assert_eq!(sample_input().archive_key(), "Doe,Jane.json");
        assert_eq!(UserInput::default().archive_key(), ",.json");
    }

    #[test]
    fn test_record_from_input_sets_identical_timestamps() {
        let now = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = UserRecord::from_input(sample_input(), "u_abc", now);

        assert_eq!(record.id, "u_abc");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.created_at, "2024-01-15T10:30:00+00:00");
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_record_serializes_wire_names() {
        let record = UserRecord::from_input(sample_input(), "u_abc", Utc::now());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "u_abc");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["phone"], "555-1212");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_create_response_message() {
        let response = CreateUserResponse::created("u_abc");
        assert_eq!(response.message, "User created successfully!");
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"id":"u_abc","message":"User created successfully!"}"#
        );
    }

    #[test]
    fn test_lookup_not_found_collapses_to_empty_record() {
        let lookup = UserLookup::from(None);
        assert!(!lookup.is_found());
        assert_eq!(lookup.into_record(), UserRecord::default());
    }
}
