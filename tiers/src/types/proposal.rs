use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::Order;
use super::quota::ProposalQuota;
use super::tier::DiscountTier;

/// Where a proposal sits in its booking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Upcoming,
    Open,
    Closed,
}

/// What happens to the conditional orders of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Window still open (or not yet started).
    Pending,
    /// Window closed with the minimum quota met; orders go through.
    Confirmed,
    /// Window closed short of the minimum quota; orders lapse.
    Void,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Upcoming => "upcoming",
            ProposalStatus::Open => "open",
            ProposalStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pending => "pending",
            Outcome::Confirmed => "confirmed",
            Outcome::Void => "void",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group-buy offer with a quantity goal, a time window and discount tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub base_price: Decimal,
    #[serde(flatten)]
    pub quota: ProposalQuota,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tiers: Vec<DiscountTier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orders: Vec<Order>,
}

impl Proposal {
    /// Booking-window status at `now`. Missing bounds are open-ended.
    pub fn status(&self, now: DateTime<Utc>) -> ProposalStatus {
        if self.starts_at.is_some_and(|start| now < start) {
            ProposalStatus::Upcoming
        } else if self.ends_at.is_some_and(|end| now >= end) {
            ProposalStatus::Closed
        } else {
            ProposalStatus::Open
        }
    }

    /// Fate of the conditional orders at `now`.
    pub fn outcome(&self, quota: &ProposalQuota, now: DateTime<Utc>) -> Outcome {
        match self.status(now) {
            ProposalStatus::Closed if quota.is_minimum_met() => Outcome::Confirmed,
            ProposalStatus::Closed => Outcome::Void,
            _ => Outcome::Pending,
        }
    }
}
