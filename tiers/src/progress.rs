use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booked quota as a percentage of `max_quota`, uncapped.
///
/// Returns zero when `max_quota` is zero.
pub fn compute_progress(booked_quota: u64, max_quota: u64) -> Decimal {
    if max_quota == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(booked_quota) * Decimal::ONE_HUNDRED / Decimal::from(max_quota)
}

/// Progress toward a proposal's goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Uncapped percentage; may exceed 100.
    pub percent: Decimal,
}

impl Progress {
    pub fn new(booked_quota: u64, max_quota: u64) -> Self {
        Self {
            percent: compute_progress(booked_quota, max_quota),
        }
    }

    /// Percentage clamped to 100 for a progress bar width.
    pub fn display_percent(&self) -> Decimal {
        self.percent.min(Decimal::ONE_HUNDRED)
    }

    pub fn is_goal_reached(&self) -> bool {
        self.percent >= Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_way() {
        assert_eq!(compute_progress(50, 100), dec!(50));
    }

    #[test]
    fn test_over_goal_is_uncapped() {
        let p = Progress::new(150, 100);
        assert_eq!(p.percent, dec!(150));
        assert_eq!(p.display_percent(), dec!(100));
        assert!(p.is_goal_reached());
    }

    #[test]
    fn test_zero_max_is_zero() {
        let p = Progress::new(25, 0);
        assert_eq!(p.percent, Decimal::ZERO);
        assert!(!p.is_goal_reached());
    }

    #[test]
    fn test_exact_goal() {
        assert!(Progress::new(100, 100).is_goal_reached());
        assert!(!Progress::new(99, 100).is_goal_reached());
    }

    #[test]
    fn test_fractional_percent() {
        assert_eq!(compute_progress(1, 8), dec!(12.5));
    }
}
