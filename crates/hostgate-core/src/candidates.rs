//! Candidate mirror lists supplied as JSON.
//!
//! The JSON is kept untyped: a payload that is valid JSON but not an array is
//! not an error here, the selection simply yields no mirror for it.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Parses JSON text holding a candidate list.
pub fn parse_candidates(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).context("parse candidate list JSON")
}

/// Reads and parses a candidate list file.
pub fn load_candidates(path: &Path) -> Result<Value> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read candidate list: {}", path.display()))?;
    let value = parse_candidates(&bytes)
        .with_context(|| format!("in file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), is_array = value.is_array(), "loaded candidate list");
    Ok(value)
}

/// String elements of a JSON array, in order. Empty for non-arrays.
pub fn candidate_strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
