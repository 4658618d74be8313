use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TierError;

/// How a stored `discountValue` is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    /// Stored as a fraction: `0.10` is ten percent.
    Fraction,
    /// Stored as a whole-number percent: `10` is ten percent.
    Percent,
    /// Legacy data with mixed storage; see [`normalize_percentage`].
    #[default]
    Inferred,
}

impl RateUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateUnit::Fraction => "fraction",
            RateUnit::Percent => "percent",
            RateUnit::Inferred => "inferred",
        }
    }
}

impl fmt::Display for RateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateUnit {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fraction" => Ok(RateUnit::Fraction),
            "percent" => Ok(RateUnit::Percent),
            "inferred" => Ok(RateUnit::Inferred),
            other => Err(TierError::UnknownRateUnit(other.to_string())),
        }
    }
}

/// A discount rate, always held as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    pub const ZERO: DiscountRate = DiscountRate(Decimal::ZERO);

    /// Build from a fraction, clamping into `[0, 1]`.
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self(fraction.clamp(Decimal::ZERO, Decimal::ONE))
    }

    /// Build from a whole-number percent, clamping into `[0, 100]`.
    pub fn from_percent(percent: Decimal) -> Self {
        Self::from_fraction(percent / Decimal::ONE_HUNDRED)
    }

    /// Read a stored value according to `unit`.
    pub fn from_stored(raw: Decimal, unit: RateUnit) -> Self {
        match unit {
            RateUnit::Fraction => Self::from_fraction(raw),
            RateUnit::Percent => Self::from_percent(raw),
            RateUnit::Inferred => Self(normalize_percentage(raw)),
        }
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }

    /// The rate as a whole-number percent (`0.10` -> `10`).
    pub fn percent(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Normalize a raw stored discount value to a fraction in `[0, 1]`.
///
/// Values greater than one are read as whole-number percents and divided by
/// 100; everything else is already a fraction. `1` therefore means 100%, not
/// 1%. Negative input yields zero and anything above 100% is capped.
///
/// The result is itself a fraction, so normalizing twice is a no-op.
pub fn normalize_percentage(raw: Decimal) -> Decimal {
    let fraction = if raw > Decimal::ONE {
        raw / Decimal::ONE_HUNDRED
    } else {
        raw
    };
    fraction.clamp(Decimal::ZERO, Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalize_whole_percent() {
        assert_eq!(normalize_percentage(dec!(10)), dec!(0.10));
        assert_eq!(normalize_percentage(dec!(25.5)), dec!(0.255));
    }

    #[test]
    fn test_normalize_fraction_passes_through() {
        assert_eq!(normalize_percentage(dec!(0.1)), dec!(0.10));
        assert_eq!(normalize_percentage(dec!(0)), dec!(0));
    }

    #[test]
    fn test_normalize_one_is_full_discount() {
        assert_eq!(normalize_percentage(dec!(1)), dec!(1));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [dec!(0), dec!(0.05), dec!(1), dec!(7), dec!(99.9), dec!(100)] {
            let once = normalize_percentage(raw);
            assert_eq!(normalize_percentage(once), once);
        }
    }

    #[test]
    fn test_normalize_clamps_out_of_range() {
        assert_eq!(normalize_percentage(dec!(-5)), dec!(0));
        assert_eq!(normalize_percentage(dec!(150)), dec!(1));
    }

    #[test]
    fn test_from_stored_explicit_units() {
        // An explicit unit removes the ambiguity at 1.
        assert_eq!(
            DiscountRate::from_stored(dec!(1), RateUnit::Percent).fraction(),
            dec!(0.01)
        );
        assert_eq!(
            DiscountRate::from_stored(dec!(1), RateUnit::Fraction).fraction(),
            dec!(1)
        );
        assert_eq!(
            DiscountRate::from_stored(dec!(15), RateUnit::Percent).fraction(),
            dec!(0.15)
        );
    }

    #[test]
    fn test_fraction_unit_clamps_percent_like_values() {
        assert_eq!(
            DiscountRate::from_stored(dec!(10), RateUnit::Fraction).fraction(),
            dec!(1)
        );
    }

    #[test]
    fn test_display_as_percent() {
        assert_eq!(DiscountRate::from_fraction(dec!(0.125)).to_string(), "12.5%");
        assert_eq!(DiscountRate::ZERO.to_string(), "0%");
    }

    #[test]
    fn test_rate_unit_from_str() {
        assert_eq!("Percent".parse::<RateUnit>().unwrap(), RateUnit::Percent);
        assert_eq!(" fraction ".parse::<RateUnit>().unwrap(), RateUnit::Fraction);
        assert!(matches!(
            "basis".parse::<RateUnit>(),
            Err(TierError::UnknownRateUnit(u)) if u == "basis"
        ));
    }
}
