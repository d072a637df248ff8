/// HeadacheRecord entity and the Intensity scale
///
/// This module defines the single record type the diary persists: one entry
/// per calendar day, carrying the headache intensity, the migraine and
/// medicine flags, and an optional free-text comment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Ordinal headache severity, 0 (none) to 3 (strong)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intensity {
    None,
    Weak,
    Medium,
    Strong,
}

impl Intensity {
    /// Parse a raw integer as stored in the database or typed on the CLI
    pub fn from_value(value: i64) -> Result<Self, DomainError> {
        match value {
            0 => Ok(Intensity::None),
            1 => Ok(Intensity::Weak),
            2 => Ok(Intensity::Medium),
            3 => Ok(Intensity::Strong),
            other => Err(DomainError::InvalidIntensity(other)),
        }
    }

    /// The numeric value persisted in the `intensity` column
    pub fn value(self) -> i64 {
        match self {
            Intensity::None => 0,
            Intensity::Weak => 1,
            Intensity::Medium => 2,
            Intensity::Strong => 3,
        }
    }

    /// Display label shown in the intensity picker
    pub fn label(self) -> &'static str {
        match self {
            Intensity::None => "0 - none",
            Intensity::Weak => "1 - weak",
            Intensity::Medium => "2 - medium",
            Intensity::Strong => "3 - strong",
        }
    }
}

/// One diary entry for a single calendar day
///
/// The date is the unique key and never changes once saved; a maintenance
/// edit may later overwrite the other four fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadacheRecord {
    /// The day this entry is for (unique, immutable once saved)
    pub date: NaiveDate,
    /// Headache severity for that day
    pub intensity: Intensity,
    /// Whether the headache felt connected to migraine
    pub migraine: bool,
    /// Whether medicine was taken to alleviate it
    pub medicine: bool,
    /// Optional free-text comment; None when empty
    pub comment: Option<String>,
}

impl HeadacheRecord {
    /// Create a new record, normalizing the comment field
    ///
    /// An empty or whitespace-only comment (including the lone trailing
    /// newline a text box produces) is stored as None.
    pub fn new(
        date: NaiveDate,
        intensity: Intensity,
        migraine: bool,
        medicine: bool,
        comment: Option<String>,
    ) -> Self {
        Self {
            date,
            intensity,
            migraine,
            medicine,
            comment: normalize_comment(comment),
        }
    }

    /// Create a record from already-persisted data (used by the storage layer)
    pub fn from_existing(
        date: NaiveDate,
        intensity: Intensity,
        migraine: bool,
        medicine: bool,
        comment: Option<String>,
    ) -> Self {
        Self {
            date,
            intensity,
            migraine,
            medicine,
            comment,
        }
    }

    /// The ISO `YYYY-MM-DD` form used as the storage key
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Trim a comment and collapse empty input to None
fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment.and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
