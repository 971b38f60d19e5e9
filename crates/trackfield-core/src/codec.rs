//! Conversion between canonical magnitudes and display strings.
//!
//! | Kind       | Magnitude unit         | Display        |
//! |------------|------------------------|----------------|
//! | `TIME`     | hundredths of a second | `HH:MM:SS.cc`  |
//! | `DISTANCE` | centimeters            | `M.cc`         |
//! | `POINTS`   | plain count            | `12345`        |
//!
//! `parse(kind, format(kind, x)) == x` holds for every `u64`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::kind::ResultKind;

const CENTIS_PER_HOUR: u64 = 360_000;
const CENTIS_PER_MINUTE: u64 = 6_000;
const CENTIS_PER_SECOND: u64 = 100;
const CENTIMETERS_PER_METER: u64 = 100;

/// Render a magnitude as the display string of `kind`.
pub fn format(kind: ResultKind, magnitude: u64) -> String {
    match kind {
        ResultKind::Time => format_time(magnitude),
        ResultKind::Distance => format_distance(magnitude),
        ResultKind::Points => magnitude.to_string(),
    }
}

/// Parse a display string of `kind` back into its magnitude.
///
/// Surrounding whitespace is ignored. Every segment between separators
/// must be a non-empty run of ASCII digits; anything else is reported as
/// [`Error::MalformedValue`] instead of being coerced to zero.
pub fn parse(kind: ResultKind, input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let result = match kind {
        ResultKind::Time => parse_time(trimmed),
        ResultKind::Distance => parse_distance(trimmed),
        ResultKind::Points => parse_segment(kind, trimmed, trimmed),
    };
    if let Err(e) = &result {
        debug!("Failed to parse {} value {:?}: {}", kind, input, e);
    }
    result
}

/// Format with an untyped kind tag, as received from a payload.
pub fn format_value(tag: Option<&str>, magnitude: u64) -> Result<String> {
    let kind = ResultKind::resolve(tag)?;
    Ok(format(kind, magnitude))
}

/// Parse with an untyped kind tag, as received from a payload.
pub fn parse_formatted_value(tag: Option<&str>, input: &str) -> Result<u64> {
    let kind = ResultKind::resolve(tag)?;
    parse(kind, input)
}

/// Convert a signed wire value into a canonical magnitude.
pub fn magnitude_from_signed(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| Error::InvalidMagnitude(value.to_string()))
}

fn format_time(magnitude: u64) -> String {
    let hours = magnitude / CENTIS_PER_HOUR;
    let minutes = (magnitude % CENTIS_PER_HOUR) / CENTIS_PER_MINUTE;
    let seconds = (magnitude % CENTIS_PER_MINUTE) / CENTIS_PER_SECOND;
    let centis = magnitude % CENTIS_PER_SECOND;

    format!("{hours:02}:{minutes:02}:{seconds:02}.{centis:02}")
}

fn format_distance(magnitude: u64) -> String {
    let meters = magnitude / CENTIMETERS_PER_METER;
    let centimeters = magnitude % CENTIMETERS_PER_METER;

    format!("{meters}.{centimeters:02}")
}

fn parse_time(input: &str) -> Result<u64> {
    let kind = ResultKind::Time;
    let parts: Vec<&str> = input.split([':', '.']).collect();
    let &[hours, minutes, seconds, centis] = parts.as_slice() else {
        return Err(Error::malformed(kind, input));
    };

    let hours = parse_segment(kind, input, hours)?;
    let minutes = parse_segment(kind, input, minutes)?;
    let seconds = parse_segment(kind, input, seconds)?;
    let centis = parse_segment(kind, input, centis)?;

    let total_seconds = hours
        .checked_mul(3600)
        .and_then(|v| v.checked_add(minutes.checked_mul(60)?))
        .and_then(|v| v.checked_add(seconds));
    total_seconds
        .and_then(|v| v.checked_mul(CENTIS_PER_SECOND))
        .and_then(|v| v.checked_add(centis))
        .ok_or_else(|| overflow(input))
}

fn parse_distance(input: &str) -> Result<u64> {
    let kind = ResultKind::Distance;
    let Some((meters, centimeters)) = input.split_once('.') else {
        return Err(Error::malformed(kind, input));
    };

    // A second '.' ends up in the centimeter segment and fails the digit check
    let meters = parse_segment(kind, input, meters)?;
    let centimeters = parse_segment(kind, input, centimeters)?;

    meters
        .checked_mul(CENTIMETERS_PER_METER)
        .and_then(|v| v.checked_add(centimeters))
        .ok_or_else(|| overflow(input))
}

fn parse_segment(kind: ResultKind, input: &str, segment: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(kind, input));
    }
    // Only digits remain, so a parse failure means the value exceeds u64
    segment.parse().map_err(|_| overflow(input))
}

fn overflow(input: &str) -> Error {
    Error::InvalidMagnitude(format!("{input:?} exceeds the representable range"))
}

/// A magnitude tagged with its kind.
///
/// `Display` renders the formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultValue {
    pub kind: ResultKind,
    pub magnitude: u64,
}

impl ResultValue {
    pub fn new(kind: ResultKind, magnitude: u64) -> Self {
        Self { kind, magnitude }
    }

    pub fn parse(kind: ResultKind, input: &str) -> Result<Self> {
        Ok(Self::new(kind, parse(kind, input)?))
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self.kind, self.magnitude))
    }
}
