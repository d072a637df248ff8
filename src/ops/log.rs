/// Saving a new diary entry
///
/// The save path composes the candidate date, validates it against the
/// calendar and the store, and persists the record. A date that already
/// has an entry or does not exist on the calendar is rejected before
/// anything is written.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{check_date, CalendarCursor, DateStatus, DomainError, HeadacheRecord, Intensity};
use crate::storage::{DiaryStorage, StorageError};
use crate::AppError;

/// Parameters for saving a day's entry
#[derive(Debug, Deserialize)]
pub struct SaveEntryParams {
    /// ISO date of the entry; defaults to yesterday when omitted
    pub date: Option<String>,
    /// Raw intensity value, 0..=3
    pub intensity: i64,
    pub migraine: bool,
    pub medicine: bool,
    pub comment: Option<String>,
}

/// Response from saving an entry
#[derive(Debug, Serialize)]
pub struct SaveEntryResponse {
    pub date: String,
    pub message: String,
}

/// Validate and persist a new entry
pub fn save_entry<S: DiaryStorage>(
    storage: &S,
    params: SaveEntryParams,
    today: NaiveDate,
) -> Result<SaveEntryResponse, AppError> {
    let date = match params.date {
        Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(date_str))?,
        None => today - Duration::days(1),
    };
    let intensity = Intensity::from_value(params.intensity)?;

    let cursor = CalendarCursor::from_date(date);
    match check_date(storage, &cursor, today)? {
        DateStatus::AlreadyRecorded => {
            return Err(StorageError::DuplicateDate {
                date: cursor.date_key(),
            }
            .into())
        }
        DateStatus::InvalidCalendarDate => {
            return Err(DomainError::InvalidDate(cursor.date_key()).into())
        }
        DateStatus::Valid(_) => {}
    }

    let record = HeadacheRecord::new(date, intensity, params.migraine, params.medicine, params.comment);
    storage.insert(&record)?;

    tracing::info!("Saved entry for {}", record.date_key());

    Ok(SaveEntryResponse {
        date: record.date_key(),
        message: "( ! ) Date and intensity saved successfully!".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;
    use tempfile::tempdir;

    fn test_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempdir().unwrap();
        let store = SqliteStore::new(dir.path().join("test.db")).unwrap();
        (dir, store)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
    }

    #[test]
    fn test_save_entry() {
        let (_dir, store) = test_store();
        let params = SaveEntryParams {
            date: Some("2024-03-15".to_string()),
            intensity: 2,
            migraine: true,
            medicine: false,
            comment: Some("afternoon only\n".to_string()),
        };

        let response = save_entry(&store, params, today()).unwrap();
        assert_eq!(response.date, "2024-03-15");

        let record = store.get("2024-03-15").unwrap().unwrap();
        assert_eq!(record.intensity, Intensity::Medium);
        assert!(record.migraine);
        assert_eq!(record.comment.as_deref(), Some("afternoon only"));
    }

    #[test]
    fn test_save_defaults_to_yesterday() {
        let (_dir, store) = test_store();
        let params = SaveEntryParams {
            date: None,
            intensity: 1,
            migraine: false,
            medicine: false,
            comment: None,
        };

        let response = save_entry(&store, params, today()).unwrap();
        assert_eq!(response.date, "2024-03-15");
    }

    #[test]
    fn test_save_duplicate_date_fails() {
        let (_dir, store) = test_store();
        let params = SaveEntryParams {
            date: Some("2024-03-15".to_string()),
            intensity: 1,
            migraine: false,
            medicine: false,
            comment: None,
        };
        save_entry(&store, params, today()).unwrap();

        let params = SaveEntryParams {
            date: Some("2024-03-15".to_string()),
            intensity: 3,
            migraine: false,
            medicine: false,
            comment: None,
        };
        let result = save_entry(&store, params, today());
        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::DuplicateDate { .. }))
        ));
    }

    #[test]
    fn test_save_rejects_out_of_range_intensity() {
        let (_dir, store) = test_store();
        let params = SaveEntryParams {
            date: Some("2024-03-15".to_string()),
            intensity: 4,
            migraine: false,
            medicine: false,
            comment: None,
        };
        let result = save_entry(&store, params, today());
        assert!(matches!(result, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_save_rejects_invalid_date() {
        let (_dir, store) = test_store();
        let params = SaveEntryParams {
            date: Some("2019-02-30".to_string()),
            intensity: 1,
            migraine: false,
            medicine: false,
            comment: None,
        };
        let result = save_entry(&store, params, today());
        assert!(matches!(result, Err(AppError::Domain(_))));
    }
}
