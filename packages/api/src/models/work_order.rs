use serde::{Deserialize, Serialize};

/// A field-service work order, as returned by `GET /work-orders-today/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    #[serde(deserialize_with = "super::id_string")]
    pub id: String,
    /// The only time-bearing field this route exposes: the moment the job
    /// clock started, as an ISO timestamp.
    #[serde(default)]
    pub elapsed_time: Option<String>,
    /// Composite one-line address, same format as the locate address.
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub wo_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}
