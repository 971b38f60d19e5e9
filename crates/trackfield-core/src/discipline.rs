use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::kind::ResultKind;

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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DisciplineType {
    Running,
    Jumping,
    Throwing,
    CombinedEvents,
}

impl DisciplineType {
    /// Result kind a discipline of this type records by default
    pub fn default_result_kind(&self) -> ResultKind {
        match self {
            Self::Running => ResultKind::Time,
            Self::Jumping | Self::Throwing => ResultKind::Distance,
            Self::CombinedEvents => ResultKind::Points,
        }
    }

    pub fn label(&self) -> String {
        let tag: &'static str = self.into();
        enum_label(tag)
    }
}

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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn label(&self) -> String {
        let tag: &'static str = self.into();
        enum_label(tag)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGroup {
    Child,
    Youth,
    Junior,
    Adult,
    Senior,
    NotEligible,
}

impl AgeGroup {
    pub fn label(&self) -> String {
        let tag: &'static str = self.into();
        enum_label(tag)
    }
}

/// A discipline and the result kind its results are recorded in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: u64,
    pub name: String,
    pub discipline_type: DisciplineType,
    pub result_type: ResultKind,
}

impl Discipline {
    /// Create a discipline using the default result kind of its type
    pub fn new(id: u64, name: impl Into<String>, discipline_type: DisciplineType) -> Self {
        Self {
            id,
            name: name.into(),
            discipline_type,
            result_type: discipline_type.default_result_kind(),
        }
    }
}

/// Turn a wire tag into a display label (`COMBINED_EVENTS` -> `Combined Events`)
pub fn enum_label(tag: &str) -> String {
    let mut label = String::with_capacity(tag.len());
    let mut word_start = true;
    for c in tag.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if word_start {
                label.extend(c.to_uppercase());
            } else {
                label.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            label.push(c);
            word_start = true;
        }
    }
    label
}
