use thiserror::Error;

use crate::kind::ResultKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Result type cannot be null")]
    MissingKind,

    #[error("Invalid result type: {0}")]
    InvalidKind(String),

    #[error("Invalid magnitude: {0}")]
    InvalidMagnitude(String),

    #[error("Malformed {kind} value: {value:?}")]
    MalformedValue { kind: ResultKind, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error comes from an absent or unrecognized result kind
    pub fn is_invalid_kind(&self) -> bool {
        matches!(self, Error::MissingKind | Error::InvalidKind(_))
    }

    /// Check if this error comes from a display string that does not decompose
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedValue { .. })
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    pub(crate) fn malformed(kind: ResultKind, value: &str) -> Self {
        Error::MalformedValue {
            kind,
            value: value.to_string(),
        }
    }
}
