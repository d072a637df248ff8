/// CalendarCursor: the date picker's candidate date and its rollover rules
///
/// The cursor holds a provisional (day, month, year) triple that is not yet
/// guaranteed to be a real calendar date. Stepping the day or month by one
/// unit can push a field out of range; `normalize` rolls the overflow into
/// the neighboring month or year, honoring each month's length and leap
/// years. The cursor is pure state plus arithmetic; rendering and widget
/// wiring belong to the presentation layer.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A candidate (day, month, year) triple, possibly out of range
///
/// Fields are independent small integers so that a single-unit step can
/// temporarily produce values like day 0 or month 13; `normalize` brings
/// the triple back into calendar bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

/// Date-picker actions forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEvent {
    /// Step the selected day forward by one
    NextDay,
    /// Step the selected day back by one
    PreviousDay,
    /// Jump to today
    SetToday,
    /// Jump to yesterday
    SetYesterday,
    /// Raw day/month/year set from the input widgets
    Set { day: i32, month: i32, year: i32 },
}

impl CalendarCursor {
    /// Cursor positioned on an existing calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day() as i32,
            month: date.month() as i32,
            year: date.year(),
        }
    }

    /// Cursor positioned on the day before `today` (the form's startup state)
    pub fn yesterday(today: NaiveDate) -> Self {
        Self::from_date(today - Duration::days(1))
    }

    /// Apply a picker event, then normalize the result
    pub fn apply(&mut self, event: CursorEvent, today: NaiveDate) {
        match event {
            CursorEvent::NextDay => self.day += 1,
            CursorEvent::PreviousDay => self.day -= 1,
            CursorEvent::SetToday => *self = Self::from_date(today),
            CursorEvent::SetYesterday => *self = Self::yesterday(today),
            CursorEvent::Set { day, month, year } => {
                self.day = day;
                self.month = month;
                self.year = year;
            }
        }
        self.normalize();
    }

    /// Roll out-of-range day and month values into the neighboring
    /// month/year
    ///
    /// The month is normalized first so a wrapped month value (0 or 13) is a
    /// real month before its length is consulted. Any day below 1 moves to
    /// the last day of the previous month; any day above the current month's
    /// length moves to day 1 of the next month, cascading into the year at
    /// the January/December boundaries. One month shift per call: callers
    /// step the day by a single unit between calls, so a single pass is
    /// enough to restore calendar bounds.
    pub fn normalize(&mut self) {
        if self.month < 1 {
            self.year -= 1;
            self.month = 12;
        } else if self.month > 12 {
            self.year += 1;
            self.month = 1;
        }

        if self.day < 1 {
            self.month -= 1;
            if self.month < 1 {
                self.month = 12;
                self.year -= 1;
            }
            self.day = days_in_month(self.year, self.month);
        } else if self.day > days_in_month(self.year, self.month) {
            self.day = 1;
            self.month += 1;
            if self.month > 12 {
                self.month = 1;
                self.year += 1;
            }
        }
    }

    /// The cursor as a real calendar date, if it forms one
    pub fn to_date(&self) -> Option<NaiveDate> {
        if self.month < 1 || self.day < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }

    /// The ISO `YYYY-MM-DD` composition of the triple, zero-padded
    ///
    /// Produced even for invalid triples; it is the string the duplicate
    /// check compares against the store.
    pub fn date_key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Number of days in a month, honoring leap years
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Proleptic Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
