use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of an order, owned by the backend
///
/// Codes the client does not know deserialize to [`OrderStatus::Unknown`]
/// so one odd row never rejects the rest of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Completed,
    Cancelled,
    Unknown,
}

impl OrderStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    /// Human readable label shown inside the status badge
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// Background class of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::New => "bg-warning",
            OrderStatus::Processing => "bg-info",
            OrderStatus::Completed => "bg-success",
            OrderStatus::Cancelled => "bg-danger",
            OrderStatus::Unknown => "bg-secondary",
        }
    }

    /// Statuses an order can be moved to
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(OrderStatus::New),
            "processing" => Some(OrderStatus::Processing),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code
            .as_deref()
            .and_then(OrderStatus::from_code)
            .unwrap_or(OrderStatus::Unknown))
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
