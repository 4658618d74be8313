//! Tier lookup by booked quantity.
//!
//! These are read paths: they never fail, and an empty or unmatched tier set
//! simply means no discount is active.

use crate::types::DiscountTier;

/// The tier in effect at `booked_quota`.
///
/// Scans tiers by `min_quota` descending and returns the first with
/// `min_quota <= booked_quota`. Only the lower bound is consulted, so callers
/// should run [`crate::validate_tiers`] first; with overlapping tiers the
/// highest qualifying minimum wins.
pub fn resolve_current_tier(tiers: &[DiscountTier], booked_quota: u64) -> Option<&DiscountTier> {
    let mut sorted: Vec<&DiscountTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| b.min_quota.cmp(&a.min_quota));
    sorted.into_iter().find(|t| t.min_quota <= booked_quota)
}

/// The next tier to unlock: smallest `min_quota` strictly above `booked_quota`.
pub fn next_tier(tiers: &[DiscountTier], booked_quota: u64) -> Option<&DiscountTier> {
    tiers
        .iter()
        .filter(|t| t.min_quota > booked_quota)
        .min_by_key(|t| t.min_quota)
}

/// How many more units must be booked to reach the next tier.
pub fn units_to_next_tier(tiers: &[DiscountTier], booked_quota: u64) -> Option<u64> {
    next_tier(tiers, booked_quota).map(|t| t.min_quota - booked_quota)
}
