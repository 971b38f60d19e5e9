//! Live input masking.
//!
//! Turns whatever has been typed so far into the display shape of a result
//! kind. Unlike [`crate::codec::parse`], masking never fails: non-digits are
//! dropped, short input is right-padded with zeros and long input is cut at
//! the kind's digit width.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::kind::{DISTANCE_DIGITS, ResultKind, TIME_DIGITS};

/// Masked text together with the cursor position to restore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedInput {
    pub text: String,
    pub cursor: usize,
}

/// Keep only the ASCII digits of `input`
pub fn digits_of(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask raw keystroke text into the display shape of `kind`.
///
/// - `TIME`: `HH:MM:SS.CC` from the first 8 digits
/// - `DISTANCE`: `MM.CC` from the first 4 digits
/// - `POINTS`: the digits alone, unpadded and uncapped
pub fn mask(kind: ResultKind, raw: &str) -> String {
    let digits = digits_of(raw);
    match kind {
        ResultKind::Time => {
            let d = pad_digits(&digits, TIME_DIGITS);
            format!("{}:{}:{}.{}", &d[0..2], &d[2..4], &d[4..6], &d[6..8])
        }
        ResultKind::Distance => {
            let d = pad_digits(&digits, DISTANCE_DIGITS);
            format!("{}.{}", &d[0..2], &d[2..4])
        }
        ResultKind::Points => digits,
    }
}

/// Mask with an untyped kind tag.
///
/// Input for an absent or unrecognized tag is passed through untouched so
/// the field stays editable.
pub fn mask_tag(tag: Option<&str>, raw: &str) -> String {
    match ResultKind::resolve(tag) {
        Ok(kind) => mask(kind, raw),
        Err(e) => {
            warn!("{}, leaving input unmasked", e);
            raw.to_string()
        }
    }
}

/// Mask `raw` and clamp the caller's cursor to the masked text.
pub fn mask_with_cursor(kind: ResultKind, raw: &str, cursor: usize) -> MaskedInput {
    let text = mask(kind, raw);
    let cursor = cursor.min(text.len());
    MaskedInput { text, cursor }
}

// `digits` is ASCII only, so byte slicing on the result is safe
fn pad_digits(digits: &str, width: usize) -> String {
    let mut padded: String = digits.chars().take(width).collect();
    while padded.len() < width {
        padded.push('0');
    }
    padded
}
