/// Date validation for the entry form
///
/// Before a save is allowed, the candidate triple must form a real calendar
/// date and must not collide with a day that already has an entry. The
/// check is read-only; it also reports whether the date is yesterday, today
/// or tomorrow, which the presentation layer shows as a hint.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::CalendarCursor;
use crate::storage::{DiaryStorage, StorageError};

/// Proximity of a valid candidate date to today (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDay {
    Yesterday,
    Today,
    Tomorrow,
}

/// Outcome of validating a candidate date against the diary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateStatus {
    /// The date is saveable; the proximity hint is set when it is
    /// yesterday, today or tomorrow
    Valid(Option<RelativeDay>),
    /// The triple does not form a real calendar date
    InvalidCalendarDate,
    /// The diary already holds an entry for this date
    AlreadyRecorded,
}

impl DateStatus {
    /// Whether the save action should be enabled
    pub fn can_save(&self) -> bool {
        matches!(self, DateStatus::Valid(_))
    }

    /// The status-bar line shown for this outcome
    pub fn status_line(&self) -> &'static str {
        match self {
            DateStatus::AlreadyRecorded => "( X ) This date is already fulfilled.",
            DateStatus::InvalidCalendarDate => "( X ) This date is invalid.",
            DateStatus::Valid(Some(RelativeDay::Yesterday)) => "Current selected date: yesterday.",
            DateStatus::Valid(Some(RelativeDay::Today)) => "Current selected date: today.",
            DateStatus::Valid(Some(RelativeDay::Tomorrow)) => "Current selected date: tomorrow.",
            DateStatus::Valid(None) => "",
        }
    }
}

/// Validate a candidate cursor position against the calendar and the store
///
/// The duplicate check runs first, comparing the composed ISO key the same
/// way the store does, so an already-recorded date reports as such even
/// while the widgets hold it.
pub fn check_date<S: DiaryStorage>(
    storage: &S,
    cursor: &CalendarCursor,
    today: NaiveDate,
) -> Result<DateStatus, StorageError> {
    if storage.contains(&cursor.date_key())? {
        return Ok(DateStatus::AlreadyRecorded);
    }

    let date = match cursor.to_date() {
        Some(date) => date,
        None => return Ok(DateStatus::InvalidCalendarDate),
    };

    let proximity = if date == today - Duration::days(1) {
        Some(RelativeDay::Yesterday)
    } else if date == today {
        Some(RelativeDay::Today)
    } else if date == today + Duration::days(1) {
        Some(RelativeDay::Tomorrow)
    } else {
        None
    };

    Ok(DateStatus::Valid(proximity))
}
