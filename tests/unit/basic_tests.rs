/// Basic unit tests to verify core functionality
use headache_diary::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_creation() {
        let record = HeadacheRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            Intensity::Medium,
            true,
            false,
            Some("afternoon headache".to_string()),
        );

        assert_eq!(record.date_key(), "2024-03-15");
        assert_eq!(record.intensity.value(), 2);
        assert!(record.migraine);
        assert!(!record.medicine);
    }

    #[test]
    fn test_cursor_rollover_across_year() {
        let mut cursor = CalendarCursor {
            day: 1,
            month: 1,
            year: 2024,
        };
        cursor.day -= 1;
        cursor.normalize();

        assert_eq!(
            cursor,
            CalendarCursor {
                day: 31,
                month: 12,
                year: 2023
            }
        );
    }

    #[test]
    fn test_intensity_bounds() {
        assert!(Intensity::from_value(0).is_ok());
        assert!(Intensity::from_value(3).is_ok());
        assert!(Intensity::from_value(4).is_err());
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStore::new(temp_file.path().to_path_buf());
        assert!(storage.is_ok());
    }

    #[test]
    fn test_session_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let session = DiarySession::open(temp_file.path().to_path_buf());
        assert!(session.is_ok());
    }

    #[test]
    fn test_filter_descriptions() {
        assert_eq!(FilterKind::LastDays(31).description(), "last 31 days");
        assert_eq!(FilterKind::ThisMonth.description(), "this month");
        assert_eq!(FilterKind::Everything.description(), "all available data");
    }
}
