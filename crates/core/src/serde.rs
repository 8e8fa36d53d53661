//! Serde helper functions for request deserialization.
//!
//! These handle the quirks of JSON produced by other runtimes, where `null`
//! is used interchangeably with an absent or empty value.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating JSON `null` as `T::default()`.
///
/// Combine with `#[serde(default)]` so absent fields behave the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        params: HashMap<String, String>,
    }

    #[test]
    fn test_null_becomes_default() {
        let parsed: TestStruct = serde_json::from_str(r#"{"name":null,"params":null}"#).unwrap();
        assert_eq!(parsed.name, "");
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn test_missing_becomes_default() {
        let parsed: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.name, "");
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn test_values_are_kept() {
        let parsed: TestStruct =
            serde_json::from_str(r#"{"name":"Jane","params":{"id":"u_1"}}"#).unwrap();
        assert_eq!(parsed.name, "Jane");
        assert_eq!(parsed.params.get("id").map(String::as_str), Some("u_1"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<TestStruct>(r#"{"name":7}"#).is_err());
    }
}
