mod cli;
mod document;
mod error;
mod output;

use std::io::{self, Write};

use clap::Parser;
use cli::Command;
use tiers::{DiscountRate, EngineConfig, Progress, RateUnit, TierEngine};
use tracing::{info, warn};

use crate::error::CliError;

const RATE_UNIT_ENV: &str = "GROUPBUY_RATE_UNIT";

fn main() {
    let _ = dotenvy::dotenv(); // load .env if present

    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig {
        rate_unit: cli.rate_unit.unwrap_or_else(rate_unit_from_env),
        currency_decimals: cli.currency_decimals,
    };

    let stdout = io::stdout();
    if let Err(e) = run(cli.command, &TierEngine::new(config), &mut stdout.lock()) {
        tracing::error!(error = %e, "groupbuy failed");
        std::process::exit(1);
    }
}

fn run<W: Write>(command: Command, engine: &TierEngine, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Validate(args) => {
            let proposal = document::load_proposal(&args.file)?;
            engine.validate(&proposal)?;
            info!(proposal = %proposal.id, tiers = proposal.tiers.len(), "proposal valid");
            writeln!(out, "ok\t{}", proposal.id)?;
        }

        Command::Summary(args) => {
            let proposal = document::load_proposal(&args.file)?;
            let now = args.at.unwrap_or_else(chrono::Utc::now);
            let summary = engine.summarize(&proposal, now)?;
            output::write_summary(&summary, args.json, out)?;
        }

        Command::Quote(args) => {
            let proposal = document::load_proposal(&args.file)?;
            let quote = engine.quote(&proposal, args.quantity)?;
            output::write_quote(&quote, args.json, out)?;
        }

        Command::Progress(args) => {
            let progress = Progress::new(args.booked, args.max);
            writeln!(
                out,
                "{}\t{}\t{}",
                output::percent(progress.percent),
                output::percent(progress.display_percent()),
                progress.is_goal_reached()
            )?;
        }

        Command::Normalize(args) => {
            let rate = DiscountRate::from_stored(args.raw, engine.config().rate_unit);
            writeln!(out, "{}", rate.fraction().normalize())?;
        }
    }

    Ok(())
}

/// Rate unit from the environment, defaulting to `inferred`.
fn rate_unit_from_env() -> RateUnit {
    match std::env::var(RATE_UNIT_ENV) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(error = %e, var = RATE_UNIT_ENV, "ignoring invalid rate unit");
            RateUnit::default()
        }),
        Err(_) => RateUnit::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::NormalizeArgs;
    use rust_decimal_macros::dec;

    fn normalize_with(unit: RateUnit, raw: rust_decimal::Decimal) -> String {
        let engine = TierEngine::new(EngineConfig {
            rate_unit: unit,
            ..Default::default()
        });
        let mut out = Vec::new();
        run(Command::Normalize(NormalizeArgs { raw }), &engine, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_normalize_follows_rate_unit() {
        assert_eq!(normalize_with(RateUnit::Inferred, dec!(1)), "1\n");
        assert_eq!(normalize_with(RateUnit::Percent, dec!(1)), "0.01\n");
        assert_eq!(normalize_with(RateUnit::Fraction, dec!(0.25)), "0.25\n");
        assert_eq!(normalize_with(RateUnit::Inferred, dec!(10)), "0.1\n");
    }

    #[test]
    fn test_progress_line() {
        let mut out = Vec::new();
        let command = Command::Progress(cli::ProgressArgs {
            booked: 150,
            max: 100,
        });
        run(command, &TierEngine::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "150%\t100%\ttrue\n");
    }
}
