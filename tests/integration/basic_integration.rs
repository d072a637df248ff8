/// Basic integration tests
use headache_diary::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
    }

    #[test]
    fn test_save_duplicate_edit_reread_flow() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let session = DiarySession::open(temp_file.path().to_path_buf()).expect("Failed to open diary");
        let storage = session.storage();

        // Save an entry for 2024-03-15.
        let params = SaveEntryParams {
            date: Some("2024-03-15".to_string()),
            intensity: 1,
            migraine: false,
            medicine: false,
            comment: None,
        };
        save_entry(storage, params, today()).expect("First save should succeed");

        // A second save for the same date is rejected.
        let params = SaveEntryParams {
            date: Some("2024-03-15".to_string()),
            intensity: 2,
            migraine: false,
            medicine: false,
            comment: None,
        };
        let result = save_entry(storage, params, today());
        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::DuplicateDate { .. }))
        ));

        // An edit of the existing date succeeds and is visible on re-read.
        let params = EditEntryParams {
            date: "2024-03-15".to_string(),
            intensity: 3,
            migraine: false,
            medicine: false,
            comment: None,
        };
        edit_entry(storage, params).expect("Edit should succeed");

        let record = storage.get("2024-03-15").unwrap().unwrap();
        assert_eq!(record.intensity, Intensity::Strong);
    }

    #[test]
    fn test_cursor_validation_save_workflow() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let mut session =
            DiarySession::open(temp_file.path().to_path_buf()).expect("Failed to open diary");

        // The session starts on yesterday; stepping and validating keeps
        // working across saves.
        let status = session.handle(CursorEvent::SetYesterday).unwrap();
        assert_eq!(status, DateStatus::Valid(Some(RelativeDay::Yesterday)));

        session
            .save_current(2, true, false, Some("first recorded day".to_string()))
            .expect("Save should succeed");

        // The same date now validates as already recorded.
        let status = session.handle(CursorEvent::SetYesterday).unwrap();
        assert_eq!(status, DateStatus::AlreadyRecorded);
        assert!(!status.can_save());

        // One step back is free again.
        let status = session.handle(CursorEvent::PreviousDay).unwrap();
        assert!(status.can_save());
    }

    #[test]
    fn test_report_and_export_flow() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let session = DiarySession::open(temp_file.path().to_path_buf()).expect("Failed to open diary");
        let storage = session.storage();

        for (date, intensity) in [("2024-02-27", 1), ("2024-03-05", 2), ("2024-03-20", 3)] {
            let params = SaveEntryParams {
                date: Some(date.to_string()),
                intensity,
                migraine: false,
                medicine: false,
                comment: None,
            };
            save_entry(storage, params, today()).expect("Save should succeed");
        }

        // The 31-day window drops the February entry.
        let response = run_report(
            storage,
            ReportParams {
                filter: FilterKind::LastDays(REPORT_WINDOW_DAYS),
                newest_first: false,
            },
            today(),
        )
        .unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.records[0].date_key(), "2024-03-05");

        // Newest-first reverses the listing.
        let response = run_report(
            storage,
            ReportParams {
                filter: FilterKind::Everything,
                newest_first: true,
            },
            today(),
        )
        .unwrap();
        assert_eq!(response.records[0].date_key(), "2024-03-20");

        // Exporting writes the rendered table to the chosen file.
        let out_file = NamedTempFile::new().expect("Failed to create temp file");
        let response = export_report(
            storage,
            ExportParams {
                filter: FilterKind::Everything,
                newest_first: false,
                path: out_file.path().to_path_buf(),
            },
            today(),
            today().and_hms_opt(9, 30, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(response.items, 3);

        let text = std::fs::read_to_string(out_file.path()).unwrap();
        assert!(text.contains("2024-02-27"));
        assert!(text.contains("Generated in 2024-03-31 09:30:00"));
    }

    #[test]
    fn test_database_persistence() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        {
            let session = DiarySession::open(db_path.clone()).expect("Failed to open diary");
            let params = SaveEntryParams {
                date: Some("2024-03-15".to_string()),
                intensity: 2,
                migraine: true,
                medicine: false,
                comment: Some("persisted across sessions".to_string()),
            };
            save_entry(session.storage(), params, today()).expect("Save should succeed");
        }

        // A second session over the same file sees the record.
        let session = DiarySession::open(db_path).expect("Failed to reopen diary");
        let record = session.storage().get("2024-03-15").unwrap().unwrap();
        assert_eq!(record.intensity, Intensity::Medium);
        assert_eq!(record.comment.as_deref(), Some("persisted across sessions"));
    }
}
