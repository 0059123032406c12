//! SQLite schema for the consultation record store.

/// Full schema, applied idempotently on every open.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS consultations (
    case_id            TEXT PRIMARY KEY,
    user_id            TEXT NOT NULL,
    ai_summary         TEXT,
    predicted_category TEXT,
    urgency_score      TEXT,
    doctor_assigned    TEXT,
    doctor_response    TEXT,
    status             TEXT DEFAULT 'PENDING',
    created_at         TEXT
);

CREATE INDEX IF NOT EXISTS idx_consultations_user_status
    ON consultations(user_id, status);
";
