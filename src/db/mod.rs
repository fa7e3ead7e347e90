//! Database module - SQLite storage for logged sets

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Sets performed for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub id: Option<i64>,
    pub date: DateTime<Utc>,
    pub muscle_group: String,
    pub exercise: Option<String>,  // e.g. "squat", informational only
    pub sets: u32,
    pub notes: Option<String>,
}

/// Row as stored: (id, date, muscle_group, exercise, sets, notes)
type RawEntry = (i64, String, String, Option<String>, u32, Option<String>);

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database (`:memory:` for a throwaway one)
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS set_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                exercise TEXT,
                sets INTEGER NOT NULL,
                notes TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Add new set entry
    pub fn add_entry(&self, entry: &SetEntry) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO set_entries (date, muscle_group, exercise, sets, notes) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entry.date.to_rfc3339(),
                entry.muscle_group,
                entry.exercise,
                entry.sets,
                entry.notes,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("Logged {} sets for {} (id: {})", entry.sets, entry.muscle_group, id);
        Ok(id)
    }

    /// Get all entries, newest first
    pub fn get_entries(&self) -> Result<Vec<SetEntry>> {
        self.query_entries(
            "SELECT id, date, muscle_group, exercise, sets, notes FROM set_entries ORDER BY date DESC",
            None,
        )
    }

    /// Get entries logged at or after `since`, newest first
    pub fn get_entries_since(&self, since: DateTime<Utc>) -> Result<Vec<SetEntry>> {
        self.query_entries(
            "SELECT id, date, muscle_group, exercise, sets, notes FROM set_entries WHERE date >= ?1 ORDER BY date DESC",
            Some(since),
        )
    }

    fn query_entries(&self, sql: &str, since: Option<DateTime<Utc>>) -> Result<Vec<SetEntry>> {
        let mut stmt = self.conn.prepare(sql)?;

        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<RawEntry> {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?))
        };

        let rows = match since {
            Some(since) => stmt
                .query_map(params![since.to_rfc3339()], map_row)?
                .collect::<Result<Vec<_>, _>>()?,
            None => stmt.query_map([], map_row)?.collect::<Result<Vec<_>, _>>()?,
        };

        rows.into_iter()
            .map(|(id, date_str, muscle_group, exercise, sets, notes)| -> Result<SetEntry> {
                let date = DateTime::parse_from_rfc3339(&date_str)?.with_timezone(&Utc);
                Ok(SetEntry {
                    id: Some(id),
                    date,
                    muscle_group,
                    exercise,
                    sets,
                    notes,
                })
            })
            .collect()
    }
}
