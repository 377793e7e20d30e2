//! # Domain models
//!
//! The records the dashboard consumes, split by backend:
//!
//! | Type | Source | Shape |
//! |------|--------|-------|
//! | [`Account`] | `/users` routes | camelCase fields (`isActive`, `createdAt`), ids as `id` or `_id` |
//! | [`LocateRequest`] | `GET /locates/` | snake_case fields, numeric or string ids |
//! | [`WorkOrder`] | `GET /work-orders-today/` | snake_case fields, numeric or string ids |

mod account;
mod locate;
mod work_order;

pub use account::{Account, AccountRole, AccountUpdate, NewAccount};
pub use locate::LocateRequest;
pub use work_order::WorkOrder;

use serde::{Deserialize, Deserializer};

/// Accept an identifier sent either as a JSON string or a number.
///
/// The field-service backend issues numeric ids while the user service
/// issues strings; both normalize to `String` here.
pub(crate) fn id_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(de)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
