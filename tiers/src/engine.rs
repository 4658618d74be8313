//! Proposal-level facade over the tier functions.
//!
//! [`TierEngine`] holds only configuration, so one instance can be shared
//! freely across callers and threads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::ledger;
use crate::pricing::{price_with_decimals, PriceBreakdown};
use crate::progress::Progress;
use crate::resolve::{next_tier, resolve_current_tier};
use crate::types::{
    DiscountRate, DiscountTier, Outcome, Proposal, ProposalQuota, ProposalStatus, TierId,
};
use crate::validate::validate_proposal;

/// Everything a proposal page shows about quota, tiers and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    pub proposal_id: String,
    pub status: ProposalStatus,
    pub outcome: Outcome,
    pub quota: ProposalQuota,
    pub remaining: Option<u64>,
    pub progress: Decimal,
    pub display_progress: Decimal,
    pub goal_reached: bool,
    pub minimum_met: bool,
    pub current_tier: Option<TierId>,
    pub current_rate: DiscountRate,
    pub next_tier: Option<TierId>,
    pub next_rate: Option<DiscountRate>,
    pub units_to_next_tier: Option<u64>,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct TierEngine {
    config: EngineConfig,
}

impl TierEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Quota and tier validation for a proposal.
    pub fn validate(&self, proposal: &Proposal) -> Result<()> {
        validate_proposal(proposal)
    }

    /// The proposal's quota with `booked_quota` taken from its orders, if any.
    ///
    /// Stored booked quota that disagrees with the order list is logged and
    /// replaced by the order total.
    pub fn effective_quota(&self, proposal: &Proposal) -> ProposalQuota {
        if proposal.orders.is_empty() {
            return proposal.quota;
        }
        let from_orders = ledger::booked_quota(&proposal.orders);
        if from_orders != proposal.quota.booked_quota {
            warn!(
                proposal = %proposal.id,
                stored = proposal.quota.booked_quota,
                from_orders,
                "booked quota drift, using order total"
            );
        }
        proposal.quota.with_booked(from_orders)
    }

    /// Discount in effect at `booked_quota`, zero if no tier applies.
    pub fn current_rate(&self, tiers: &[DiscountTier], booked_quota: u64) -> DiscountRate {
        resolve_current_tier(tiers, booked_quota)
            .map(|t| t.rate(self.config.rate_unit))
            .unwrap_or(DiscountRate::ZERO)
    }

    /// Validate `proposal` and build its summary as of `now`.
    pub fn summarize(&self, proposal: &Proposal, now: DateTime<Utc>) -> Result<ProposalSummary> {
        self.validate(proposal)?;

        let quota = self.effective_quota(proposal);
        let booked = quota.booked_quota;
        let progress = Progress::new(booked, quota.max_quota);
        let current = resolve_current_tier(&proposal.tiers, booked);
        let next = next_tier(&proposal.tiers, booked);
        let current_rate = current
            .map(|t| t.rate(self.config.rate_unit))
            .unwrap_or(DiscountRate::ZERO);
        let unit_price = price_with_decimals(
            proposal.base_price,
            current_rate,
            1,
            self.config.currency_decimals,
        )?
        .unit_price;

        debug!(
            proposal = %proposal.id,
            booked,
            tier = current.map(|t| t.id.as_str()),
            "summarized proposal"
        );

        Ok(ProposalSummary {
            proposal_id: proposal.id.clone(),
            status: proposal.status(now),
            outcome: proposal.outcome(&quota, now),
            quota,
            remaining: quota.remaining(),
            progress: progress.percent,
            display_progress: progress.display_percent(),
            goal_reached: progress.is_goal_reached(),
            minimum_met: quota.is_minimum_met(),
            current_tier: current.map(|t| t.id.clone()),
            current_rate,
            next_tier: next.map(|t| t.id.clone()),
            next_rate: next.map(|t| t.rate(self.config.rate_unit)),
            units_to_next_tier: next.map(|t| t.min_quota - booked),
            unit_price,
        })
    }

    /// Price an order of `quantity` units at the proposal's current tier.
    ///
    /// The order must fit the remaining capacity; the discount is the one in
    /// effect before the order is booked. A total too large for a `Decimal`
    /// is [`TierError::Overflow`](crate::TierError::Overflow).
    pub fn quote(&self, proposal: &Proposal, quantity: u64) -> Result<PriceBreakdown> {
        self.validate(proposal)?;
        let quota = self.effective_quota(proposal);
        ledger::check_placement(&quota, quantity)?;

        let rate = self.current_rate(&proposal.tiers, quota.booked_quota);
        price_with_decimals(
            proposal.base_price,
            rate,
            quantity,
            self.config.currency_decimals,
        )
    }
}
