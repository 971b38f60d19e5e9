//! Export command for writing result tables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use trackfield_core::{JsonExporter, TsvExporter, load_stored_results};

use crate::cli::ExportFormat;

/// Export stored results
///
/// An `output` naming an existing directory receives `<input stem>.<ext>`.
pub fn run(input: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let results = load_stored_results(input)
        .with_context(|| format!("Failed to load results from {}", input.display()))?;

    let exporter: &dyn trackfield_core::ExportFormat = match format {
        ExportFormat::Tsv => &TsvExporter,
        ExportFormat::Json => &JsonExporter,
    };
    let content = exporter.format_rows(&results);

    // Write output
    if let Some(output) = output {
        let output_path = resolve_output(exporter, input, output);
        std::fs::write(&output_path, &content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        eprintln!("Exported {} results to: {}", results.len(), output_path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}

fn resolve_output(
    exporter: &dyn trackfield_core::ExportFormat,
    input: &Path,
    output: &Path,
) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("results");
    exporter.output_path(output, stem)
}
