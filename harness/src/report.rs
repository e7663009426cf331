//! Solve report artifact: canonical JSON plus content digest.
//!
//! The report is the machine-readable output of a run. Object keys are
//! emitted in sorted order (`serde_json`'s default map is ordered), all
//! numbers are integers, and the digest is computed over the exact
//! serialized bytes — byte-identical reports across runs are the
//! determinism check.

use sha2::{Digest, Sha256};

use decant_space::space::JugSpace;

use crate::runner::{SolveRun, StrategyOutcome};

/// Report format version tag.
pub const REPORT_VERSION: &str = "decant/report/v1";

/// Error building a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// JSON serialization failed.
    Serialize { detail: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize { detail } => write!(f, "report serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Build the JSON value for one run.
#[must_use]
pub fn report_value(run: &SolveRun) -> serde_json::Value {
    let space = JugSpace::new(run.problem);
    serde_json::json!({
        "version": REPORT_VERSION,
        "problem": {
            "first_capacity": run.problem.first_capacity,
            "second_capacity": run.problem.second_capacity,
            "goal_volume": run.problem.goal_volume,
        },
        "strategies": {
            "depth_first": strategy_value(&run.depth_first, &space),
            "breadth_first": strategy_value(&run.breadth_first, &space),
        },
    })
}

fn strategy_value(outcome: &StrategyOutcome, space: &JugSpace) -> serde_json::Value {
    let path: Vec<serde_json::Value> = outcome
        .path
        .iter()
        .map(|levels| serde_json::json!([levels.first, levels.second]))
        .collect();

    // Move labels between consecutive path entries. The generator only
    // ever yields legal successors, so every hop classifies.
    let moves: Vec<serde_json::Value> = outcome
        .path
        .windows(2)
        .map(|pair| match space.classify(pair[0], pair[1]) {
            Some(kind) => serde_json::Value::String(kind.id().to_string()),
            None => serde_json::Value::Null,
        })
        .collect();

    serde_json::json!({
        "discipline": outcome.discipline.id(),
        "solved": outcome.solved(),
        "path": path,
        "moves": moves,
        "stats": {
            "expansions": outcome.stats.expansions,
            "duplicates_suppressed": outcome.stats.duplicates_suppressed,
            "frontier_high_water": outcome.stats.frontier_high_water,
            "distinct_values": outcome.stats.distinct_values,
        },
    })
}

/// Serialize the report to its canonical bytes: compact form with sorted
/// object keys.
///
/// # Errors
///
/// Returns [`ReportError::Serialize`] if JSON serialization fails.
pub fn report_bytes(run: &SolveRun) -> Result<Vec<u8>, ReportError> {
    serde_json::to_vec(&report_value(run)).map_err(|e| ReportError::Serialize {
        detail: e.to_string(),
    })
}

/// Compute the `"sha256:<hex>"` digest of the exact report bytes.
#[must_use]
pub fn report_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
