//! # List payload normalization
//!
//! The backend's list endpoints are not consistent about their envelope:
//! depending on the route (and its age) a listing arrives as a bare JSON
//! array, as `{"data": [...]}`, or as `{"<entity>": [...]}` keyed by the
//! collection name. [`decode_list`] coerces all three into `Vec<T>`.
//!
//! Anything else is a contract violation and comes back as
//! [`ApiError::UnexpectedShape`] — callers may still choose to render an
//! empty collection, but the failure is visible instead of being silently
//! swallowed.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decode a list response body into typed records.
///
/// `key` is the collection name used both for the keyed-object shape
/// (`{"users": [...]}`) and for diagnostics.
pub fn decode_list<T: DeserializeOwned>(body: Value, key: &'static str) -> Result<Vec<T>, ApiError> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match (map.remove("data"), map.remove(key)) {
            (Some(Value::Array(rows)), _) => rows,
            (None, Some(Value::Array(rows))) => rows,
            _ => return Err(ApiError::UnexpectedShape { key }),
        },
        _ => return Err(ApiError::UnexpectedShape { key }),
    };

    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(ApiError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use serde_json::json;

    fn account_row(id: &str) -> Value {
        json!({
            "id": id,
            "name": "Jane Doe",
            "email": "jane@x.com",
            "role": "manager",
            "isActive": true,
        })
    }

    #[test]
    fn decodes_bare_array() {
        let body = json!([account_row("1"), account_row("2")]);
        let accounts: Vec<Account> = decode_list(body, "users").unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "1");
    }

    #[test]
    fn decodes_data_wrapper() {
        let body = json!({ "data": [account_row("1")] });
        let accounts: Vec<Account> = decode_list(body, "users").unwrap();
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn decodes_entity_keyed_wrapper() {
        let body = json!({ "users": [account_row("1")] });
        let accounts: Vec<Account> = decode_list(body, "users").unwrap();
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn data_wrapper_wins_over_entity_key() {
        let body = json!({
            "data": [account_row("1")],
            "users": [account_row("2"), account_row("3")],
        });
        let accounts: Vec<Account> = decode_list(body, "users").unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "1");
    }

    #[test]
    fn unknown_object_shape_is_an_error() {
        let body = json!({ "results": [account_row("1")] });
        let err = decode_list::<Account>(body, "users").unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape { key: "users" }));
    }

    #[test]
    fn scalar_body_is_an_error() {
        let err = decode_list::<Account>(json!(42), "users").unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape { .. }));
    }

    #[test]
    fn malformed_record_is_a_decode_error() {
        let body = json!([{ "id": "1", "name": "No Email" }]);
        let err = decode_list::<Account>(body, "users").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
