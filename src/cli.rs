use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tiers::RateUnit;

/// groupbuy — discount tier and quota tooling for group-buy proposals.
#[derive(Parser, Debug)]
#[command(name = "groupbuy", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// How tier discount values are stored (fraction, percent, inferred).
    /// Falls back to GROUPBUY_RATE_UNIT, then `inferred`.
    #[arg(long, global = true)]
    pub rate_unit: Option<RateUnit>,

    /// Decimal places for currency rounding
    #[arg(long, default_value = "2", global = true)]
    pub currency_decimals: u32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a proposal's quota range and tier ladder
    Validate(FileArgs),

    /// Show progress, current and next tier for a proposal
    Summary(SummaryArgs),

    /// Price an order at the proposal's current tier
    Quote(QuoteArgs),

    /// Compute progress toward a quota
    Progress(ProgressArgs),

    /// Normalize a stored discount value to a fraction using --rate-unit
    Normalize(NormalizeArgs),
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// Proposal JSON document
    pub file: PathBuf,
}

/// Arguments for the `summary` subcommand.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Proposal JSON document
    pub file: PathBuf,

    /// Evaluate the booking window at this RFC 3339 time instead of now
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,

    /// Output as JSON instead of TSV
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Proposal JSON document
    pub file: PathBuf,

    /// Units to order
    #[arg(long, short)]
    pub quantity: u64,

    /// Output as JSON instead of TSV
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `progress` subcommand.
#[derive(Parser, Debug)]
pub struct ProgressArgs {
    /// Booked quantity
    #[arg(long)]
    pub booked: u64,

    /// Maximum quota
    #[arg(long)]
    pub max: u64,
}

/// Arguments for the `normalize` subcommand.
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Raw stored discount value (e.g. 10 or 0.1)
    pub raw: Decimal,
}
