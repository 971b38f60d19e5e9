use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::codec::{format, parse};
use crate::error::Result;
use crate::kind::ResultKind;

/// Result submitted by a form, carrying the display string as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    pub participant_id: u64,
    pub discipline_id: u64,
    pub result_type: ResultKind,
    pub date: NaiveDate,
    pub result_value: String,
}

impl ResultRequest {
    /// Canonical magnitude of the submitted value
    pub fn magnitude(&self) -> Result<u64> {
        parse(self.result_type, &self.result_value)
    }
}

/// Result as presented to readers, with the value already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub id: u64,
    pub result_type: ResultKind,
    pub date: NaiveDate,
    pub formatted_value: String,
    pub participant_id: u64,
    pub discipline_id: u64,
    pub participant_name: String,
    pub discipline_name: String,
}

impl ResultResponse {
    /// Recover the canonical magnitude.
    ///
    /// Corrupt data surfaces as an error rather than as zero.
    pub fn magnitude(&self) -> Result<u64> {
        parse(self.result_type, &self.formatted_value)
    }
}

/// Result as kept at rest, with the canonical magnitude
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub id: u64,
    pub result_type: ResultKind,
    pub date: NaiveDate,
    pub magnitude: u64,
    pub participant_id: u64,
    pub discipline_id: u64,
    pub participant_name: String,
    pub discipline_name: String,
}

impl StoredResult {
    pub fn formatted_value(&self) -> String {
        format(self.result_type, self.magnitude)
    }

    pub fn to_response(&self) -> ResultResponse {
        ResultResponse {
            id: self.id,
            result_type: self.result_type,
            date: self.date,
            formatted_value: self.formatted_value(),
            participant_id: self.participant_id,
            discipline_id: self.discipline_id,
            participant_name: self.participant_name.clone(),
            discipline_name: self.discipline_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_stored(result_type: ResultKind, magnitude: u64) -> StoredResult {
        StoredResult {
            id: 1,
            result_type,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            magnitude,
            participant_id: 7,
            discipline_id: 3,
            participant_name: "Ada Runner".to_string(),
            discipline_name: "Marathon".to_string(),
        }
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "participantId": 7,
            "disciplineId": 3,
            "resultType": "TIME",
            "date": "2024-06-01",
            "resultValue": "02:02:00.51"
        }"#;
        let request: ResultRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.result_type, ResultKind::Time);
        assert_eq!(request.magnitude().unwrap(), 732051);
    }

    #[test]
    fn test_request_rejects_unknown_kind() {
        let json = r#"{
            "participantId": 7,
            "disciplineId": 3,
            "resultType": "HEIGHT",
            "date": "2024-06-01",
            "resultValue": "1.50"
        }"#;
        assert!(serde_json::from_str::<ResultRequest>(json).is_err());
    }

    #[test]
    fn test_stored_to_response() {
        let stored = make_stored(ResultKind::Distance, 150);
        let response = stored.to_response();
        assert_eq!(response.formatted_value, "1.50");
        assert_eq!(response.participant_name, "Ada Runner");
        assert_eq!(response.magnitude().unwrap(), 150);
    }

    #[test]
    fn test_response_corrupt_value_is_error() {
        let mut response = make_stored(ResultKind::Time, 0).to_response();
        response.formatted_value = "ab:cd:ef.gh".to_string();
        assert!(response.magnitude().unwrap_err().is_malformed());
    }

    #[test]
    fn test_response_json_field_names() {
        let response = make_stored(ResultKind::Points, 6543).to_response();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["formattedValue"], "6543");
        assert_eq!(json["resultType"], "POINTS");
        assert_eq!(json["date"], "2024-06-01");
    }
}
