//! Tier-range validation.
//!
//! This is the strict write path: a tier set that fails here must not be
//! persisted, and nothing is corrected silently.

use tracing::debug;

use crate::error::{Result, TierError};
use crate::types::{DiscountTier, Proposal, ProposalQuota};

/// Check every tier's own range, then check the set for overlap.
///
/// Ranges must be strictly disjoint once sorted by `min_quota`: a tier ending
/// at 10 followed by one starting at 10 is rejected, starting at 11 is fine.
/// An unbounded tier overlaps anything after it.
///
/// # Errors
///
/// * [`TierError::Range`] if a tier has `min_quota > max_quota`.
/// * [`TierError::Overlap`] for the first overlapping adjacent pair.
pub fn validate_tiers(tiers: &[DiscountTier]) -> Result<()> {
    for tier in tiers {
        if let Some(max) = tier.max_quota {
            if tier.min_quota > max {
                return Err(TierError::Range {
                    id: tier.id.clone(),
                    min: tier.min_quota,
                    max,
                });
            }
        }
    }

    let mut sorted: Vec<&DiscountTier> = tiers.iter().collect();
    sorted.sort_by_key(|t| t.min_quota);

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let overlaps = current
            .max_quota
            .map_or(true, |max| max >= next.min_quota);
        if overlaps {
            return Err(TierError::Overlap {
                first: current.id.clone(),
                second: next.id.clone(),
                at: next.min_quota,
            });
        }
    }

    debug!(tiers = tiers.len(), "tier set valid");
    Ok(())
}

/// Check the proposal's own quota range.
///
/// A zero `max_quota` is uncapped and never conflicts with `min_quota`.
pub fn validate_quota(quota: &ProposalQuota) -> Result<()> {
    if quota.max_quota > 0 && quota.min_quota > quota.max_quota {
        return Err(TierError::QuotaRange {
            min: quota.min_quota,
            max: quota.max_quota,
        });
    }
    Ok(())
}

/// Validate a whole proposal: quota range first, then its tiers.
pub fn validate_proposal(proposal: &Proposal) -> Result<()> {
    validate_quota(&proposal.quota)?;
    validate_tiers(&proposal.tiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tier(id: &str, min: u64, max: Option<u64>) -> DiscountTier {
        DiscountTier::new(id, min, max, dec!(0.1))
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(validate_tiers(&[]).is_ok());
    }

    #[test]
    fn test_disjoint_tiers_valid_in_any_order() {
        let tiers = vec![
            tier("c", 20, None),
            tier("a", 0, Some(9)),
            tier("b", 10, Some(19)),
        ];
        assert!(validate_tiers(&tiers).is_ok());
    }

    #[test]
    fn test_range_error() {
        let tiers = vec![tier("a", 0, Some(9)), tier("bad", 15, Some(12))];
        assert_eq!(
            validate_tiers(&tiers),
            Err(TierError::Range {
                id: "bad".into(),
                min: 15,
                max: 12
            })
        );
    }

    #[test]
    fn test_single_point_tier_is_valid() {
        assert!(validate_tiers(&[tier("a", 5, Some(5))]).is_ok());
    }

    #[test]
    fn test_touching_boundary_is_overlap() {
        let tiers = vec![tier("a", 0, Some(10)), tier("b", 10, Some(20))];
        assert_eq!(
            validate_tiers(&tiers),
            Err(TierError::Overlap {
                first: "a".into(),
                second: "b".into(),
                at: 10
            })
        );
    }

    #[test]
    fn test_adjacent_boundary_accepted() {
        let tiers = vec![tier("a", 0, Some(10)), tier("b", 11, Some(20))];
        assert!(validate_tiers(&tiers).is_ok());
    }

    #[test]
    fn test_containment_is_overlap() {
        let tiers = vec![tier("outer", 0, Some(100)), tier("inner", 20, Some(30))];
        assert!(matches!(
            validate_tiers(&tiers),
            Err(TierError::Overlap { .. })
        ));
    }

    #[test]
    fn test_unbounded_tier_overlaps_successor() {
        let tiers = vec![tier("open", 10, None), tier("later", 1_000, Some(2_000))];
        assert!(matches!(
            validate_tiers(&tiers),
            Err(TierError::Overlap { first, .. }) if first == "open"
        ));
    }

    #[test]
    fn test_range_checked_before_overlap() {
        let tiers = vec![tier("a", 0, Some(10)), tier("b", 5, Some(1))];
        assert!(matches!(validate_tiers(&tiers), Err(TierError::Range { .. })));
    }

    #[test]
    fn test_validate_quota() {
        assert!(validate_quota(&ProposalQuota::new(10, 100, 0)).is_ok());
        assert!(validate_quota(&ProposalQuota::new(10, 0, 0)).is_ok());
        assert_eq!(
            validate_quota(&ProposalQuota::new(50, 40, 0)),
            Err(TierError::QuotaRange { min: 50, max: 40 })
        );
    }
}
