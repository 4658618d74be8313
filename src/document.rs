use std::fs;
use std::path::Path;

use tiers::Proposal;
use tracing::debug;

use crate::error::CliError;

/// Load a proposal JSON document from disk.
pub fn load_proposal(path: &Path) -> Result<Proposal, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Document {
        path: path.display().to_string(),
        source,
    })?;
    let proposal: Proposal = serde_json::from_str(&text)?;
    debug!(
        path = %path.display(),
        proposal = %proposal.id,
        tiers = proposal.tiers.len(),
        orders = proposal.orders.len(),
        "loaded proposal"
    );
    Ok(proposal)
}
