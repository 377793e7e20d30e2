//! # Account model and write payloads
//!
//! Three representations of a staff account:
//!
//! - [`Account`] — the record as read from the backend. The credential is
//!   write-only and never appears here.
//! - [`NewAccount`] — the create payload; the credential is required.
//! - [`AccountUpdate`] — the update payload; a `None` credential is omitted
//!   from the JSON entirely, which the server interprets as "unchanged".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Staff roles recognised by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Tech,
    Manager,
    Superadmin,
}

impl AccountRole {
    /// Wire value, as used in role-scoped routes like `/users/tech`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::Tech => "tech",
            AccountRole::Manager => "manager",
            AccountRole::Superadmin => "superadmin",
        }
    }

    /// Human-readable label for table cells and role pickers.
    pub fn label(&self) -> &'static str {
        match self {
            AccountRole::Tech => "Tech",
            AccountRole::Manager => "Manager",
            AccountRole::Superadmin => "Super Admin",
        }
    }
}

/// A staff account as returned by the `/users` routes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Server-issued identifier, never reassigned. Older routes still emit
    /// the Mongo-style `_id` spelling.
    #[serde(alias = "_id", deserialize_with = "super::id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /users/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: AccountRole,
    pub is_active: bool,
}

/// Payload for `PUT /users/{id}/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub name: String,
    pub email: String,
    pub role: AccountRole,
    pub is_active: bool,
    /// `None` leaves the stored credential untouched; the key must not be
    /// present in the JSON at all in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_mongo_style_id() {
        let account: Account = serde_json::from_value(json!({
            "_id": "abc123",
            "name": "Ray",
            "email": "ray@fieldops.dev",
            "role": "tech",
            "isActive": true,
            "createdAt": "2026-07-01T12:00:00Z",
        }))
        .unwrap();
        assert_eq!(account.id, "abc123");
        assert_eq!(account.role, AccountRole::Tech);
        assert!(account.is_active);
        assert!(account.created_at.is_some());
    }

    #[test]
    fn missing_optional_fields_default() {
        let account: Account = serde_json::from_value(json!({
            "id": 7,
            "name": "Ray",
            "email": "ray@fieldops.dev",
            "role": "superadmin",
        }))
        .unwrap();
        assert_eq!(account.id, "7");
        assert!(!account.is_active);
        assert!(account.created_at.is_none());
    }

    #[test]
    fn update_omits_unset_credential() {
        let update = AccountUpdate {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            role: AccountRole::Manager,
            is_active: true,
            password: None,
        };
        let value = serde_json::to_value(&update).unwrap();
        assert!(value.get("password").is_none());

        let update = AccountUpdate {
            password: Some("secret".into()),
            ..update
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn roles_round_trip_lowercase() {
        assert_eq!(serde_json::to_value(AccountRole::Superadmin).unwrap(), "superadmin");
        let role: AccountRole = serde_json::from_value(json!("manager")).unwrap();
        assert_eq!(role, AccountRole::Manager);
    }
}
