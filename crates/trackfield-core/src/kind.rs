use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Digits in a fully masked `HHMMSSCC` time
pub(crate) const TIME_DIGITS: usize = 8;
/// Digits in a fully masked `MMCC` distance
pub(crate) const DISTANCE_DIGITS: usize = 4;

/// Measurement grammar of a discipline's results.
///
/// The variant decides both the unit of the canonical magnitude and the
/// shape of the display string.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    /// Hundredths of a second, displayed as `HH:MM:SS.cc`
    #[strum(serialize = "TIME")]
    Time,
    /// Centimeters, displayed as `M.cc`
    #[strum(serialize = "DISTANCE")]
    Distance,
    /// Plain count, displayed as a decimal integer
    #[strum(serialize = "POINTS")]
    Points,
}

impl ResultKind {
    /// Resolve an untyped wire tag.
    ///
    /// An absent tag and an unrecognized tag are both rejected, with
    /// distinct messages.
    pub fn resolve(tag: Option<&str>) -> Result<Self> {
        let tag = tag.ok_or(Error::MissingKind)?;
        tag.parse()
            .map_err(|_| Error::InvalidKind(tag.to_string()))
    }

    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// Number of digits the live mask pads to (`None` = no cap)
    pub fn digit_width(&self) -> Option<usize> {
        match self {
            Self::Time => Some(TIME_DIGITS),
            Self::Distance => Some(DISTANCE_DIGITS),
            Self::Points => None,
        }
    }

    /// Input hint shown next to a result field
    pub fn format_hint(&self) -> &'static str {
        match self {
            Self::Time => "Format: HH:MM:SS.ss (e.g., 01:23:45.67)",
            Self::Distance => "Format: M.CC (e.g., 123.45)",
            Self::Points => "Enter the points as a number",
        }
    }

    /// Unit of the canonical magnitude
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Time => "hundredths of a second",
            Self::Distance => "centimeters",
            Self::Points => "points",
        }
    }
}
