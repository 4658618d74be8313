use thiserror::Error;

use crate::types::{OrderId, TierId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierError {
    #[error("tier {id}: min quota {min} exceeds max quota {max}")]
    Range { id: TierId, min: u64, max: u64 },

    #[error("tier {first} overlaps tier {second} at quota {at}")]
    Overlap {
        first: TierId,
        second: TierId,
        at: u64,
    },

    #[error("proposal min quota {min} exceeds max quota {max}")]
    QuotaRange { min: u64, max: u64 },

    #[error("order quantity must be positive")]
    InvalidQuantity,

    #[error("requested {requested} exceeds remaining capacity {remaining}")]
    CapacityExceeded { requested: u64, remaining: u64 },

    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("order already cancelled: {0}")]
    OrderCancelled(OrderId),

    #[error("unknown rate unit: {0}")]
    UnknownRateUnit(String),

    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, TierError>;
