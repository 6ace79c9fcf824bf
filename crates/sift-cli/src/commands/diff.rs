use anyhow::{Context, Result};
use serde_json::Value;
use sift_diff::{diff_with, ChangeRecord, DiffOptions};
use std::path::Path;

use super::to_json;

/// Read a JSON document from disk
pub fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Diff two JSON documents on disk
pub fn run(source: &Path, target: &Path, options: &DiffOptions) -> Result<ChangeRecord> {
    let before = read_json(source)?;
    let after = read_json(target)?;

    let changes = diff_with(&before, &after, options)
        .with_context(|| format!("Cannot diff {} against {}", source.display(), target.display()))?;

    tracing::debug!("{} field(s) changed", changes.len());
    Ok(changes)
}

pub fn execute(source: &Path, target: &Path, options: &DiffOptions, pretty: bool) -> Result<()> {
    let changes = run(source, target, options)?;
    println!("{}", to_json(&changes, pretty)?);
    Ok(())
}
