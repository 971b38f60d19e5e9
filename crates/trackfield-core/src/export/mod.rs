//! Result table export.
//!
//! - **TSV**: header plus one tab separated row per result
//! - **JSON**: one object per line (NDJSON)
//!
//! Input is a JSON array of stored results, as written by the backend.

mod format;
mod json;
mod tsv;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::StoredResult;

pub use format::ExportFormat;
pub use json::{JsonExporter, format_json_entry};
pub use tsv::{TsvExporter, format_tsv_header, format_tsv_row};

/// Load stored results from a JSON array file
pub fn load_stored_results(path: impl AsRef<Path>) -> Result<Vec<StoredResult>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let results: Vec<StoredResult> = serde_json::from_str(&content)?;
    info!("Loaded {} results from {}", results.len(), path.display());
    Ok(results)
}
