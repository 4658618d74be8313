use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rate::{DiscountRate, RateUnit};

/// Unique identifier for a discount tier.
pub type TierId = String;

/// A discount rate applicable within a booked-quantity range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    pub id: TierId,
    pub min_quota: u64,
    /// `None` means the range is unbounded above.
    #[serde(default)]
    pub max_quota: Option<u64>,
    /// Raw stored value; read it through [`DiscountTier::rate`].
    pub discount_value: Decimal,
}

impl DiscountTier {
    pub fn new(
        id: impl Into<TierId>,
        min_quota: u64,
        max_quota: Option<u64>,
        discount_value: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            min_quota,
            max_quota,
            discount_value,
        }
    }

    /// Whether `quota` falls inside `[min_quota, max_quota]`.
    pub fn contains(&self, quota: u64) -> bool {
        quota >= self.min_quota && self.max_quota.map_or(true, |max| quota <= max)
    }

    /// The tier's discount read according to `unit`.
    pub fn rate(&self, unit: RateUnit) -> DiscountRate {
        DiscountRate::from_stored(self.discount_value, unit)
    }
}
