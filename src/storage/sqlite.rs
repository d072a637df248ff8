/// SQLite implementation of the diary storage interface
///
/// This module provides the concrete SQLite implementation for storing and
/// retrieving headache records. It holds a single connection opened at
/// startup and kept for the process lifetime; every insert and update is
/// committed immediately.

use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::domain::{HeadacheRecord, Intensity};
use crate::storage::{schema, DiaryStorage, SortOrder, StorageError};

const RECORD_COLUMNS: &str = "date, intensity, migraine, medicine, comment";

/// SQLite-based storage implementation
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database file and apply the schema
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        schema::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Map one result row to a record
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<HeadacheRecord> {
        let date_str: String = row.get(0)?;
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::InvalidColumnType(0, "Invalid date".to_string(), rusqlite::types::Type::Text)
        })?;

        let intensity_raw: i64 = row.get(1)?;
        let intensity = Intensity::from_value(intensity_raw).map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                1,
                "Invalid intensity".to_string(),
                rusqlite::types::Type::Integer,
            )
        })?;

        Ok(HeadacheRecord::from_existing(
            date,
            intensity,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }

    /// Run a `date >= floor` read with the requested ordering
    fn read_floor(&self, floor: &str, order: SortOrder) -> Result<Vec<HeadacheRecord>, StorageError> {
        let sql = format!(
            "SELECT {} FROM headache WHERE date >= ?1 ORDER BY date {}",
            RECORD_COLUMNS,
            order.as_sql()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![floor], Self::row_to_record)?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }

    /// Count rows with `date >= floor`
    fn count_floor(&self, floor: &str) -> Result<u64, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM headache WHERE date >= ?1",
            params![floor],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn is_constraint_violation(error: &rusqlite::Error) -> bool {
        matches!(
            error,
            rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

impl DiaryStorage for SqliteStore {
    /// Insert a new entry; a unique-date collision maps to DuplicateDate
    fn insert(&self, record: &HeadacheRecord) -> Result<(), StorageError> {
        let result = self.conn.execute(
            "INSERT INTO headache (date, intensity, migraine, medicine, comment)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.date_key(),
                record.intensity.value(),
                record.migraine,
                record.medicine,
                record.comment
            ],
        );

        match result {
            Ok(_) => {
                tracing::debug!("Inserted entry for {}", record.date_key());
                Ok(())
            }
            Err(e) if Self::is_constraint_violation(&e) => Err(StorageError::DuplicateDate {
                date: record.date_key(),
            }),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Overwrite intensity, migraine, medicine and comment for an existing date
    fn update(&self, record: &HeadacheRecord) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE headache SET intensity = ?2, migraine = ?3, medicine = ?4, comment = ?5
             WHERE date = ?1",
            params![
                record.date_key(),
                record.intensity.value(),
                record.migraine,
                record.medicine,
                record.comment
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound {
                date: record.date_key(),
            });
        }

        tracing::debug!("Updated entry for {}", record.date_key());
        Ok(())
    }

    fn contains(&self, date_key: &str) -> Result<bool, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM headache WHERE date = ?1",
            params![date_key],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    fn get(&self, date_key: &str) -> Result<Option<HeadacheRecord>, StorageError> {
        let sql = format!("SELECT {} FROM headache WHERE date = ?1", RECORD_COLUMNS);
        let result = self
            .conn
            .query_row(&sql, params![date_key], Self::row_to_record);

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    fn count_since(&self, floor: &str) -> Result<u64, StorageError> {
        self.count_floor(floor)
    }

    /// The `YYYY-MM` prefix sorts below every `YYYY-MM-DD` of that month,
    /// so the month count is the same floor comparison
    fn count_for_month(&self, year_month: &str) -> Result<u64, StorageError> {
        self.count_floor(year_month)
    }

    fn count_all(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM headache", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn read_since(&self, floor: &str, order: SortOrder) -> Result<Vec<HeadacheRecord>, StorageError> {
        self.read_floor(floor, order)
    }

    fn read_for_month(
        &self,
        year_month: &str,
        order: SortOrder,
    ) -> Result<Vec<HeadacheRecord>, StorageError> {
        self.read_floor(year_month, order)
    }

    fn read_all(&self, order: SortOrder) -> Result<Vec<HeadacheRecord>, StorageError> {
        let sql = format!(
            "SELECT {} FROM headache ORDER BY date {}",
            RECORD_COLUMNS,
            order.as_sql()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }
        Ok(records)
    }
}
