//! Flat text export of the valid identifiers.

use std::path::Path;

use anyhow::{Context, Result};

use curp_model::CurpAnalysis;

/// Comma-space join of the valid identifiers, in input order.
pub fn valid_curps_line(analyses: &[CurpAnalysis]) -> String {
    let valid: Vec<&str> = analyses
        .iter()
        .filter(|analysis| analysis.is_valid())
        .map(|analysis| analysis.normalized.as_str())
        .collect();
    valid.join(", ")
}

/// Write the valid-identifier line to a file.
pub fn write_valid_curps(path: &Path, analyses: &[CurpAnalysis]) -> Result<()> {
    std::fs::write(path, valid_curps_line(analyses))
        .with_context(|| format!("write valid CURP list to {}", path.display()))
}
