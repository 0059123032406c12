//! Slot-filling clinical intake engine.
//!
//! Drives a short symptom interview: the first utterance picks a body-system
//! category, a keyword router narrows it to a sub-group, and regex cascades
//! pull structured facts out of each answer until the sub-group's question
//! bank has nothing left to ask. The finished interview becomes a
//! consultation case in the record store, where it waits for human review;
//! while a case is open the user's intake is locked and their messages are
//! relayed to the reviewer instead.
//!
//! Pipeline, one module each:
//!
//! - [`dialogue`]: turn loop, classification, routing, session table
//! - [`extract`]: regex slot extraction, negation handling, red-flag urgency
//! - [`taxonomy`]: router tables and question banks (pure data)
//! - [`summary`]: per-category case summary templates
//! - [`models`]: sessions, clipboards, consultation cases
//! - [`store`]: SQLite-backed case persistence behind [`RecordStore`]
//!
//! ```no_run
//! use triage_core::{IntakeEngine, SqliteStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = IntakeEngine::new(SqliteStore::open("cases.db")?);
//! let outcome = engine.start_or_continue("user-1", "severe stomach pain for 2 days")?;
//! if let Some(question) = outcome.question {
//!     println!("{question}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod dialogue;
pub mod extract;
pub mod models;
pub mod store;
pub mod summary;
pub mod taxonomy;

pub use dialogue::{EngineError, EngineResult, IntakeEngine, TurnOutcome};
pub use extract::{Extraction, Extractor, DEFAULT_SEVERITY_PATTERN};
pub use models::{
    CaseStatus, CaseUpdate, Category, Clipboard, Consultation, OpenCase, Session, SubGroup,
    Urgency,
};
pub use store::{RecordStore, SqliteStore, StoreError, StoreResult};
pub use summary::summarize;
