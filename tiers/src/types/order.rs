use serde::{Deserialize, Serialize};

/// Unique identifier for a conditional order.
pub type OrderId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Placed,
    Cancelled,
}

/// A conditional order committing quantity to a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub quantity: u64,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    pub fn placed(id: impl Into<OrderId>, quantity: u64) -> Self {
        Self {
            id: id.into(),
            quantity,
            status: OrderStatus::Placed,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Placed
    }
}
