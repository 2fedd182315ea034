use crate::domain::common::AggregateId;
use crate::enums::OrderStatus;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned order identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order as returned by the backend.
///
/// The client only ever holds a transient rendering of it; the lifecycle is
/// owned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default = "default_status")]
    pub status: OrderStatus,
    /// Customer name (`customer_name` in the orders table)
    #[serde(alias = "customer_name", default)]
    pub name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default)]
    pub product: String,
    /// Stored as free text by the backend, numeric in older rows
    #[serde(default, deserialize_with = "display_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub price: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub size: Option<String>,
}

fn default_status() -> OrderStatus {
    OrderStatus::New
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_to_text(value))
}
