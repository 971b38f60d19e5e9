//! Shared shape of result table exporters

use std::path::{Path, PathBuf};

use crate::record::StoredResult;

/// A result table format.
///
/// Implementors provide the per-row rendering; table assembly and output
/// naming are shared.
pub trait ExportFormat {
    /// File extension without the leading dot
    fn file_extension(&self) -> &'static str;

    /// Column header line, if the format has one
    fn header(&self) -> Option<String>;

    fn format_row(&self, result: &StoredResult) -> String;

    /// Render the whole table, one newline-terminated line per entry
    fn format_rows(&self, results: &[StoredResult]) -> String {
        self.header()
            .into_iter()
            .chain(results.iter().map(|result| self.format_row(result)))
            .fold(String::new(), |mut output, line| {
                output.push_str(&line);
                output.push('\n');
                output
            })
    }

    /// Where an export of `stem` lands inside `dir`
    fn output_path(&self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(format!("{}.{}", stem, self.file_extension()))
    }
}
