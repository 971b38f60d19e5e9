//! # trackfield-core
//!
//! Result value handling for athletics competitions.
//!
//! This crate provides:
//! - Result kinds (`TIME`, `DISTANCE`, `POINTS`) and their wire tags
//! - The codec between canonical integer magnitudes and display strings
//! - Live masking of partially typed input
//! - Discipline metadata and result payload types
//! - TSV/JSON export of result tables

pub mod codec;
pub mod discipline;
pub mod error;
pub mod export;
pub mod kind;
pub mod mask;
pub mod record;

pub use codec::{
    ResultValue, format, format_value, magnitude_from_signed, parse, parse_formatted_value,
};
pub use discipline::{AgeGroup, Discipline, DisciplineType, Gender, enum_label};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, JsonExporter, TsvExporter, format_json_entry, format_tsv_header,
    format_tsv_row, load_stored_results,
};
pub use kind::ResultKind;
pub use mask::{MaskedInput, digits_of, mask, mask_tag, mask_with_cursor};
pub use record::{ResultRequest, ResultResponse, StoredResult};
