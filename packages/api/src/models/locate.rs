use serde::{Deserialize, Serialize};

/// A utility locate request, as returned by `GET /locates/`.
///
/// Every field except the id is optional — the field-service backend fills
/// them in as the request moves through its own pipeline, and the feed
/// tolerates records at any stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocateRequest {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    /// Creation time; older records carry `created_date` instead.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    /// Composite one-line address: "123 Main St - Springfield, IL 62704".
    #[serde(default)]
    pub customer_address: Option<String>,
    #[serde(default)]
    pub work_order_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}
