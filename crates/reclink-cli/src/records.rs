//! Loading records from JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use reclink_core::MapRecord;
use tracing::{info, trace};

use crate::logging::redact_value;

/// Load a record from a JSON object of string fields.
pub fn load_record(path: &Path) -> Result<MapRecord> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read record {}", path.display()))?;
    let record: MapRecord = serde_json::from_str(&text)
        .with_context(|| format!("parse record {} as a JSON object of strings", path.display()))?;
    info!(path = %path.display(), fields = record.len(), "loaded record");
    for (name, value) in record.iter() {
        trace!(field = name, value = redact_value(value), "record field");
    }
    Ok(record)
}
