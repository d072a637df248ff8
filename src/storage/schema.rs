/// Database schema management
///
/// The diary keeps a single `headache` table, one row per calendar day.
/// Creation is idempotent: an existing table is success, any other failure
/// is fatal for initialization.

use rusqlite::Connection;

use crate::storage::StorageError;

/// Create the `headache` table if it does not exist yet
///
/// The date column is the unique entry key; the intensity range is also
/// enforced in the schema so nothing outside 0..=3 can land in the file.
pub fn initialize_database(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS headache (
            _id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL UNIQUE,
            intensity INTEGER NOT NULL DEFAULT 1 CHECK(intensity >= 0 AND intensity <= 3),
            migraine INTEGER NOT NULL DEFAULT 0,
            medicine INTEGER NOT NULL DEFAULT 0,
            comment TEXT DEFAULT NULL
        )",
        [],
    )
    .map_err(|e| StorageError::Schema(e.to_string()))?;

    tracing::info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_initialize_database_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        assert!(initialize_database(&conn).is_ok());
        assert!(initialize_database(&conn).is_ok());

        let table_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='headache'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 1);
    }

    #[test]
    fn test_intensity_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_database(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO headache (date, intensity) VALUES ('2024-03-15', 4)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_date_unique_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_database(&conn).unwrap();

        conn.execute("INSERT INTO headache (date, intensity) VALUES ('2024-03-15', 2)", [])
            .unwrap();
        let result = conn.execute(
            "INSERT INTO headache (date, intensity) VALUES ('2024-03-15', 1)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_column_defaults() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_database(&conn).unwrap();

        conn.execute("INSERT INTO headache (date) VALUES ('2024-03-15')", [])
            .unwrap();
        let (intensity, migraine, medicine, comment): (i64, i64, i64, Option<String>) = conn
            .query_row(
                "SELECT intensity, migraine, medicine, comment FROM headache WHERE date = '2024-03-15'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();

        assert_eq!(intensity, 1);
        assert_eq!(migraine, 0);
        assert_eq!(medicine, 0);
        assert_eq!(comment, None);
    }
}
