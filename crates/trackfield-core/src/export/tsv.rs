//! TSV export format implementation

use crate::record::StoredResult;

use super::format::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn file_extension(&self) -> &'static str {
        "tsv"
    }

    fn header(&self) -> Option<String> {
        Some(format_tsv_header())
    }

    fn format_row(&self, result: &StoredResult) -> String {
        format_tsv_row(result)
    }
}

/// Generate TSV header
pub fn format_tsv_header() -> String {
    [
        "Date",
        "Participant",
        "Discipline",
        "Type",
        "Result",
        "Magnitude",
    ]
    .join("\t")
}

/// Generate a TSV row, replacing tabs and newlines inside names
pub fn format_tsv_row(result: &StoredResult) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        result.date,
        sanitize_field(&result.participant_name),
        sanitize_field(&result.discipline_name),
        result.result_type,
        result.formatted_value(),
        result.magnitude
    )
}

fn sanitize_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ResultKind;
    use chrono::NaiveDate;

    fn make_result(name: &str, result_type: ResultKind, magnitude: u64) -> StoredResult {
        StoredResult {
            id: 1,
            result_type,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            magnitude,
            participant_id: 1,
            discipline_id: 1,
            participant_name: name.to_string(),
            discipline_name: "Shot Put".to_string(),
        }
    }

    #[test]
    fn test_tsv_header_columns() {
        assert_eq!(format_tsv_header().split('\t').count(), 6);
    }

    #[test]
    fn test_tsv_row() {
        let row = format_tsv_row(&make_result("Ada", ResultKind::Distance, 1523));
        assert_eq!(row, "2024-06-01\tAda\tShot Put\tDISTANCE\t15.23\t1523");
    }

    #[test]
    fn test_tsv_row_sanitizes_names() {
        let row = format_tsv_row(&make_result("Ada\tL.\nRunner", ResultKind::Points, 10));
        assert_eq!(row.split('\t').count(), 6);
        assert!(row.contains("Ada L. Runner"));
    }

    #[test]
    fn test_format_rows_with_header() {
        let rows = vec![
            make_result("Ada", ResultKind::Time, 732051),
            make_result("Bo", ResultKind::Time, 1234),
        ];
        let output = TsvExporter.format_rows(&rows);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date\t"));
        assert!(lines[1].contains("02:02:00.51"));
        assert!(lines[2].contains("00:00:12.34"));
    }
}
