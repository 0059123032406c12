//! Persistence for consultation cases.
//!
//! The dialogue engine only ever talks to the [`RecordStore`] trait; the
//! bundled [`SqliteStore`] is the production implementation, and tests can
//! substitute their own.

mod schema;
mod sqlite;

pub use schema::SCHEMA;
pub use sqlite::SqliteStore;

use crate::models::{CaseUpdate, Consultation, OpenCase};

/// Errors from the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("no case with id {0}")]
    NotFound(String),

    #[error("store connection lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing store for finalized cases.
pub trait RecordStore {
    /// The most recent case for this user still awaiting review
    /// (PENDING or NEEDS_INFO), if any.
    fn find_open_case(&self, user_id: &str) -> StoreResult<Option<OpenCase>>;

    /// Persist a newly finalized case.
    fn create_case(&self, case: &Consultation) -> StoreResult<()>;

    /// Apply a partial update to an existing case.
    fn update_case(&self, case_id: &str, update: &CaseUpdate) -> StoreResult<()>;
}
