use crate::pricing::CURRENCY_DECIMALS;
use crate::types::RateUnit;

/// Configuration for the tier engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How stored tier `discountValue`s are read.
    pub rate_unit: RateUnit,
    /// Decimal places for currency rounding.
    pub currency_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate_unit: RateUnit::Inferred,
            currency_decimals: CURRENCY_DECIMALS,
        }
    }
}
