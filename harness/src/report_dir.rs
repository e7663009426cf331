//! Report directory persistence: write and verify a solve report on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json         — canonical report bytes
//!   report_digest.txt   — ASCII digest line ("sha256:...")
//! ```
//!
//! The directory path is never part of any digest surface.
//!
//! # Fail-closed semantics
//!
//! Reading verifies the stored digest against the recomputed digest of
//! the report bytes. A missing file or a mismatch is an error, never a
//! silent pass.

use std::fs;
use std::path::Path;

use crate::report::report_digest;

/// Report filename inside the directory.
pub const REPORT_FILENAME: &str = "report.json";
/// Digest filename inside the directory.
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// Error writing or verifying a report directory.
#[derive(Debug)]
pub enum ReportDirError {
    /// I/O error during read or write.
    Io { detail: String },
    /// Stored digest does not match the recomputed report digest.
    DigestMismatch { stored: String, computed: String },
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::DigestMismatch { stored, computed } => {
                write!(f, "report digest mismatch: stored {stored}, computed {computed}")
            }
        }
    }
}

impl std::error::Error for ReportDirError {}

fn io_err(e: &std::io::Error) -> ReportDirError {
    ReportDirError::Io {
        detail: e.to_string(),
    }
}

/// Write `report` bytes and their digest into `dir`, creating it if
/// needed.
///
/// # Errors
///
/// Returns [`ReportDirError::Io`] if the directory or either file cannot
/// be written.
pub fn write_report_dir(dir: &Path, report: &[u8]) -> Result<(), ReportDirError> {
    fs::create_dir_all(dir).map_err(|e| io_err(&e))?;
    fs::write(dir.join(REPORT_FILENAME), report).map_err(|e| io_err(&e))?;
    let digest_line = format!("{}\n", report_digest(report));
    fs::write(dir.join(DIGEST_FILENAME), digest_line).map_err(|e| io_err(&e))?;
    Ok(())
}

/// Read `dir` and verify the stored digest against the recomputed one.
///
/// Returns the verified report bytes.
///
/// # Errors
///
/// Returns [`ReportDirError::Io`] if either file is unreadable, or
/// [`ReportDirError::DigestMismatch`] if the stored digest does not
/// match the report bytes.
pub fn read_report_dir(dir: &Path) -> Result<Vec<u8>, ReportDirError> {
    let report = fs::read(dir.join(REPORT_FILENAME)).map_err(|e| io_err(&e))?;
    let stored = fs::read_to_string(dir.join(DIGEST_FILENAME)).map_err(|e| io_err(&e))?;
    let stored = stored.trim();

    let computed = report_digest(&report);
    if stored != computed {
        return Err(ReportDirError::DigestMismatch {
            stored: stored.to_string(),
            computed,
        });
    }
    Ok(report)
}
