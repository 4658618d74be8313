use serde::{Deserialize, Serialize};

/// Quantity goal and current commitment for a proposal.
///
/// `booked_quota` is owned by the order flow; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalQuota {
    pub min_quota: u64,
    pub max_quota: u64,
    #[serde(default)]
    pub booked_quota: u64,
}

impl ProposalQuota {
    pub fn new(min_quota: u64, max_quota: u64, booked_quota: u64) -> Self {
        Self {
            min_quota,
            max_quota,
            booked_quota,
        }
    }

    /// Units still available before `max_quota` is reached.
    ///
    /// A zero `max_quota` means the proposal has no cap.
    pub fn remaining(&self) -> Option<u64> {
        if self.max_quota == 0 {
            None
        } else {
            Some(self.max_quota.saturating_sub(self.booked_quota))
        }
    }

    /// Whether enough has been booked for the group buy to go ahead.
    pub fn is_minimum_met(&self) -> bool {
        self.booked_quota >= self.min_quota
    }

    /// Copy with a different booked quantity.
    pub fn with_booked(&self, booked_quota: u64) -> Self {
        Self {
            booked_quota,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        assert_eq!(ProposalQuota::new(10, 100, 40).remaining(), Some(60));
        assert_eq!(ProposalQuota::new(10, 100, 120).remaining(), Some(0));
        assert_eq!(ProposalQuota::new(0, 0, 500).remaining(), None);
    }

    #[test]
    fn test_is_minimum_met() {
        assert!(!ProposalQuota::new(10, 100, 9).is_minimum_met());
        assert!(ProposalQuota::new(10, 100, 10).is_minimum_met());
    }
}
