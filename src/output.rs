use std::io::Write;

use rust_decimal::Decimal;
use tiers::{PriceBreakdown, ProposalSummary};

use crate::error::CliError;

/// Write a proposal summary as JSON or as TSV `key\tvalue` lines.
pub fn write_summary<W: Write>(
    summary: &ProposalSummary,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        return write_json(summary, writer);
    }

    let mut buf = String::new();
    push_row(&mut buf, "proposal", &summary.proposal_id);
    push_row(&mut buf, "status", summary.status.as_str());
    push_row(&mut buf, "outcome", summary.outcome.as_str());
    push_row(&mut buf, "booked", &summary.quota.booked_quota.to_string());
    push_row(&mut buf, "min_quota", &summary.quota.min_quota.to_string());
    push_row(&mut buf, "max_quota", &summary.quota.max_quota.to_string());
    push_row(&mut buf, "remaining", &opt(summary.remaining));
    push_row(&mut buf, "progress", &percent(summary.progress));
    push_row(&mut buf, "display_progress", &percent(summary.display_progress));
    push_row(&mut buf, "goal_reached", &summary.goal_reached.to_string());
    push_row(&mut buf, "minimum_met", &summary.minimum_met.to_string());
    push_row(&mut buf, "current_tier", &opt(summary.current_tier.as_ref()));
    push_row(&mut buf, "current_rate", &summary.current_rate.to_string());
    push_row(&mut buf, "next_tier", &opt(summary.next_tier.as_ref()));
    push_row(&mut buf, "next_rate", &opt(summary.next_rate));
    push_row(&mut buf, "units_to_next_tier", &opt(summary.units_to_next_tier));
    push_row(&mut buf, "unit_price", &summary.unit_price.to_string());

    writer.write_all(buf.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a priced order line as JSON or TSV.
pub fn write_quote<W: Write>(
    quote: &PriceBreakdown,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        return write_json(quote, writer);
    }

    let mut buf = String::new();
    push_row(&mut buf, "base_price", &quote.base_price.to_string());
    push_row(&mut buf, "discount", &quote.discount.to_string());
    push_row(&mut buf, "unit_price", &quote.unit_price.to_string());
    push_row(&mut buf, "quantity", &quote.quantity.to_string());
    push_row(&mut buf, "total", &quote.total.to_string());
    push_row(&mut buf, "savings", &quote.savings.to_string());

    writer.write_all(buf.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize>(value: &T, writer: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn push_row(buf: &mut String, key: &str, value: &str) {
    buf.push_str(key);
    buf.push('\t');
    buf.push_str(value);
    buf.push('\n');
}

/// Percentage with trailing zeros trimmed and at most two places.
pub fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2).normalize())
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tiers::{compute_discounted_price, DiscountTier, Proposal, ProposalQuota, TierEngine};

    fn summary() -> ProposalSummary {
        let p = Proposal {
            id: "PRP-7".into(),
            name: String::new(),
            base_price: dec!(20),
            quota: ProposalQuota::new(5, 30, 10),
            starts_at: None,
            ends_at: None,
            tiers: vec![
                DiscountTier::new("T1", 0, Some(9), dec!(5)),
                DiscountTier::new("T2", 10, None, dec!(15)),
            ],
            orders: Vec::new(),
        };
        TierEngine::default()
            .summarize(&p, chrono::Utc::now())
            .unwrap()
    }

    fn rows(out: &[u8]) -> Vec<(String, String)> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(|l| {
                let (k, v) = l.split_once('\t').unwrap();
                (k.to_string(), v.to_string())
            })
            .collect()
    }

    fn lookup<'a>(rows: &'a [(String, String)], key: &str) -> &'a str {
        &rows.iter().find(|(k, _)| k == key).unwrap().1
    }

    #[test]
    fn test_summary_tsv() {
        let mut out = Vec::new();
        write_summary(&summary(), false, &mut out).unwrap();
        let rows = rows(&out);
        assert_eq!(lookup(&rows, "proposal"), "PRP-7");
        assert_eq!(lookup(&rows, "status"), "open");
        assert_eq!(lookup(&rows, "progress"), "33.33%");
        assert_eq!(lookup(&rows, "current_tier"), "T2");
        assert_eq!(lookup(&rows, "current_rate"), "15%");
        assert_eq!(lookup(&rows, "next_tier"), "-");
        assert_eq!(lookup(&rows, "remaining"), "20");
    }

    #[test]
    fn test_summary_json_parses_back() {
        let mut out = Vec::new();
        write_summary(&summary(), true, &mut out).unwrap();
        let back: ProposalSummary = serde_json::from_slice(&out).unwrap();
        assert_eq!(back, summary());
    }

    #[test]
    fn test_quote_tsv() {
        let mut out = Vec::new();
        let quote = compute_discounted_price(dec!(100), dec!(0.10), 3).unwrap();
        write_quote(&quote, false, &mut out).unwrap();
        let rows = rows(&out);
        assert_eq!(lookup(&rows, "discount"), "10%");
        assert_eq!(lookup(&rows, "quantity"), "3");
        assert_eq!(lookup(&rows, "total").parse::<Decimal>().unwrap(), dec!(270));
        assert_eq!(lookup(&rows, "savings").parse::<Decimal>().unwrap(), dec!(30));
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(dec!(50.000)), "50%");
        assert_eq!(percent(dec!(12.345)), "12.34%");
        assert_eq!(percent(dec!(0)), "0%");
    }
}
