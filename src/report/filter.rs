/// Report filters: named date ranges over the diary
///
/// A filter selection ("last 31 days", "this month", "everything") resolves
/// to a date floor and an ordering, then fetches the matching count and the
/// ordered records from the store.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::HeadacheRecord;
use crate::storage::{DiaryStorage, SortOrder, StorageError};

/// The stock report window of the "recent entries" filter
pub const REPORT_WINDOW_DAYS: i64 = 31;

/// Named date-range selections for the report window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Entries from the last N days (N = 31 in the stock filter list)
    LastDays(i64),
    /// Entries of the current month
    ThisMonth,
    /// The whole diary
    Everything,
}

impl FilterKind {
    /// The inclusive date floor this filter compares against, if any
    ///
    /// ThisMonth uses the bare `YYYY-MM` prefix of today, which sorts below
    /// every ISO date of that month; entries are never future-dated, so no
    /// upper bound is needed.
    pub fn date_floor(&self, today: NaiveDate) -> Option<String> {
        match self {
            FilterKind::LastDays(days) => {
                Some((today - Duration::days(*days)).format("%Y-%m-%d").to_string())
            }
            FilterKind::ThisMonth => Some(today.format("%Y-%m").to_string()),
            FilterKind::Everything => None,
        }
    }

    /// Human-readable description used in the report status line
    pub fn description(&self) -> String {
        match self {
            FilterKind::LastDays(days) => format!("last {} days", days),
            FilterKind::ThisMonth => "this month".to_string(),
            FilterKind::Everything => "all available data".to_string(),
        }
    }
}

/// The matching count and ordered records of a resolved filter
#[derive(Debug, Serialize)]
pub struct FilteredReport {
    pub count: u64,
    pub records: Vec<HeadacheRecord>,
}

/// Resolve a filter against the store
pub fn run_filter<S: DiaryStorage>(
    storage: &S,
    kind: FilterKind,
    order: SortOrder,
    today: NaiveDate,
) -> Result<FilteredReport, StorageError> {
    let (count, records) = match kind {
        FilterKind::LastDays(_) => {
            let floor = kind.date_floor(today).unwrap_or_default();
            (storage.count_since(&floor)?, storage.read_since(&floor, order)?)
        }
        FilterKind::ThisMonth => {
            let floor = kind.date_floor(today).unwrap_or_default();
            (
                storage.count_for_month(&floor)?,
                storage.read_for_month(&floor, order)?,
            )
        }
        FilterKind::Everything => (storage.count_all()?, storage.read_all(order)?),
    };

    Ok(FilteredReport { count, records })
}
