//! Input file loading

use anyhow::{Context, Result};
use hrdoc_core::application::{create_hr_record, HrRecordInput};
use hrdoc_core::domain::HrRecord;
use std::path::Path;

/// Read a flat HR input JSON file and build the nested record
pub fn load_flat(path: &Path) -> Result<HrRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let input: HrRecordInput =
        serde_json::from_str(&text).context("Invalid flat HR input JSON")?;
    Ok(create_hr_record(input))
}

/// Read an already nested HR record JSON file
pub fn load_nested(path: &Path) -> Result<HrRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).context("Invalid HR record JSON")
}
