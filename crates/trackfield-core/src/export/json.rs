//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::record::StoredResult;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn file_extension(&self) -> &'static str {
        "ndjson"
    }

    fn header(&self) -> Option<String> {
        None // JSON doesn't need a header
    }

    fn format_row(&self, result: &StoredResult) -> String {
        format_json_entry(result).to_string()
    }
}

/// Generate a JSON entry carrying both the formatted value and the magnitude
pub fn format_json_entry(result: &StoredResult) -> JsonValue {
    json!({
        "id": result.id,
        "date": result.date.to_string(),
        "participantId": result.participant_id,
        "participantName": result.participant_name,
        "disciplineId": result.discipline_id,
        "disciplineName": result.discipline_name,
        "resultType": result.result_type.tag(),
        "formattedValue": result.formatted_value(),
        "magnitude": result.magnitude
    })
}
