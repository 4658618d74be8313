//! Discounted order pricing.
//!
//! Unit price is rounded to the currency's minor unit (midpoint away from
//! zero) and the total is taken from the rounded unit price, so a receipt
//! always satisfies `total == unit_price * quantity`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TierError};
use crate::types::DiscountRate;

/// Default number of decimal places for currency amounts.
pub const CURRENCY_DECIMALS: u32 = 2;

/// Priced order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub discount: DiscountRate,
    pub unit_price: Decimal,
    pub quantity: u64,
    pub total: Decimal,
    /// Undiscounted total less `total`, both at the line's precision.
    pub savings: Decimal,
}

/// Price `quantity` units at `base_price` less `discount_fraction`.
///
/// The fraction is clamped into `[0, 1]`; use [`DiscountRate`] to read stored
/// values first.
///
/// # Errors
///
/// Returns [`TierError::Overflow`] if the line total does not fit a `Decimal`.
pub fn compute_discounted_price(
    base_price: Decimal,
    discount_fraction: Decimal,
    quantity: u64,
) -> Result<PriceBreakdown> {
    price_with_decimals(
        base_price,
        DiscountRate::from_fraction(discount_fraction),
        quantity,
        CURRENCY_DECIMALS,
    )
}

/// Same as [`compute_discounted_price`] with an explicit currency precision.
pub fn price_with_decimals(
    base_price: Decimal,
    discount: DiscountRate,
    quantity: u64,
    decimals: u32,
) -> Result<PriceBreakdown> {
    let units = Decimal::from(quantity);
    let discounted = base_price
        .checked_mul(Decimal::ONE - discount.fraction())
        .ok_or_else(|| overflow("unit price", base_price, 1))?;
    let unit_price = round_currency(discounted, decimals);
    let total = unit_price
        .checked_mul(units)
        .ok_or_else(|| overflow("total", unit_price, quantity))?;
    let full = round_currency(base_price, decimals)
        .checked_mul(units)
        .ok_or_else(|| overflow("undiscounted total", base_price, quantity))?;
    let savings = full
        .checked_sub(total)
        .ok_or_else(|| overflow("savings", base_price, quantity))?;

    Ok(PriceBreakdown {
        base_price,
        discount,
        unit_price,
        quantity,
        total,
        savings,
    })
}

fn overflow(what: &str, price: Decimal, quantity: u64) -> TierError {
    TierError::Overflow(format!("{what} for {quantity} x {price}"))
}

fn round_currency(amount: Decimal, decimals: u32) -> Decimal {
    amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}
