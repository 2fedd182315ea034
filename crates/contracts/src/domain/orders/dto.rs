use super::aggregate::Order;
use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Aggregate counters pushed by the backend alongside every mutation.
///
/// A missing field means "leave that counter alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    #[serde(default)]
    pub total_orders: Option<i64>,
    #[serde(default)]
    pub new_orders: Option<i64>,
    #[serde(default)]
    pub completed_orders: Option<i64>,
    #[serde(default)]
    pub today_orders: Option<i64>,
}

/// Body of `POST /api/orders/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Response of the status update and delete endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub new_status: Option<OrderStatus>,
    #[serde(default)]
    pub stats: Option<OrderStats>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /api/orders/new/count`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrdersCountResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub count: i64,
}

/// Response of `GET /api/orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default)]
    pub error: Option<String>,
}
