//! SQLite-backed record store.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension, ToSql};

use super::schema::SCHEMA;
use super::{RecordStore, StoreError, StoreResult};
use crate::models::{CaseStatus, CaseUpdate, Consultation, OpenCase};

/// Consultation store on a single SQLite connection.
///
/// The connection is behind a mutex so the store can be shared by
/// reference; SQLite serializes writes anyway.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store at the given path and apply the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    /// In-memory store, mainly for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl RecordStore for SqliteStore {
    fn find_open_case(&self, user_id: &str) -> StoreResult<Option<OpenCase>> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT case_id, status FROM consultations
                 WHERE user_id = ?1 AND status IN ('PENDING', 'NEEDS_INFO')
                 ORDER BY created_at DESC LIMIT 1",
                params![user_id],
                |row| {
                    let case_id: String = row.get(0)?;
                    let raw: String = row.get(1)?;
                    let status = CaseStatus::parse(&raw).ok_or_else(|| {
                        rusqlite::Error::FromSqlConversionFailure(
                            1,
                            rusqlite::types::Type::Text,
                            format!("unknown case status: {raw}").into(),
                        )
                    })?;
                    Ok(OpenCase { case_id, status })
                },
            )
            .optional()?;
        Ok(row)
    }

    fn create_case(&self, case: &Consultation) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO consultations
                (case_id, user_id, ai_summary, predicted_category, urgency_score,
                 doctor_assigned, doctor_response, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                case.case_id,
                case.user_id,
                case.summary,
                case.category.as_str(),
                case.urgency.as_str(),
                case.assigned_specialist,
                case.doctor_response,
                case.status.as_str(),
                case.created_at,
            ],
        )?;
        Ok(())
    }

    fn update_case(&self, case_id: &str, update: &CaseUpdate) -> StoreResult<()> {
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();
        if let Some(summary) = &update.summary {
            sets.push("ai_summary = ?");
            values.push(summary);
        }
        if let Some(response) = &update.doctor_response {
            sets.push("doctor_response = ?");
            values.push(response);
        }
        let status_str = update.status.map(|s| s.as_str());
        if let Some(status) = &status_str {
            sets.push("status = ?");
            values.push(status);
        }
        if sets.is_empty() {
            return Ok(());
        }
        values.push(&case_id);

        let sql = format!(
            "UPDATE consultations SET {} WHERE case_id = ?",
            sets.join(", ")
        );
        let conn = self.lock()?;
        let changed = conn.execute(&sql, rusqlite::params_from_iter(values))?;
        if changed == 0 {
            return Err(StoreError::NotFound(case_id.to_string()));
        }
        Ok(())
    }
}
