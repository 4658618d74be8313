pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod pricing;
pub mod progress;
pub mod resolve;
pub mod types;
pub mod validate;

// ---- Top-level re-exports for ergonomic usage ----

// Engine + config
pub use config::EngineConfig;
pub use engine::{ProposalSummary, TierEngine};
pub use error::{Result, TierError};

// Records
pub use types::{
    DiscountRate, DiscountTier, Order, OrderId, OrderStatus, Outcome, Proposal, ProposalQuota,
    ProposalStatus, RateUnit, TierId,
};

// Pure tier functions
pub use pricing::{compute_discounted_price, PriceBreakdown};
pub use progress::{compute_progress, Progress};
pub use resolve::{next_tier, resolve_current_tier, units_to_next_tier};
pub use types::normalize_percentage;
pub use validate::{validate_proposal, validate_quota, validate_tiers};
