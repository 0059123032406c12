//! Consultation case records handed to the record store.

use serde::{Deserialize, Serialize};

use super::category::{Category, Urgency};

/// Review lifecycle of a consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    /// Sent to the reviewer; blocks further intake for this user.
    Pending,
    /// Reviewer asked for more input; the next patient turn is relayed
    /// as a reply instead of entering the dialogue engine.
    NeedsInfo,
    /// Reviewer responded with a final answer; case closed.
    Completed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "PENDING",
            CaseStatus::NeedsInfo => "NEEDS_INFO",
            CaseStatus::Completed => "COMPLETED",
        }
    }

    pub fn parse(s: &str) -> Option<CaseStatus> {
        match s {
            "PENDING" => Some(CaseStatus::Pending),
            "NEEDS_INFO" => Some(CaseStatus::NeedsInfo),
            "COMPLETED" => Some(CaseStatus::Completed),
            _ => None,
        }
    }
}

/// A finalized intake case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    /// Unique case ID.
    pub case_id: String,
    /// Owning user.
    pub user_id: String,
    /// Natural-language intake summary.
    pub summary: String,
    /// Category the interview ended in.
    pub category: Category,
    /// Escalation level at completion.
    pub urgency: Urgency,
    /// Specialist the case is routed to.
    pub assigned_specialist: String,
    /// Reviewer's answer, once given.
    pub doctor_response: Option<String>,
    pub status: CaseStatus,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Consultation {
    /// Create a new pending case for a completed interview.
    pub fn new(
        user_id: impl Into<String>,
        summary: impl Into<String>,
        category: Category,
        urgency: Urgency,
    ) -> Self {
        Self {
            case_id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            summary: summary.into(),
            category,
            urgency,
            assigned_specialist: category.specialist().to_string(),
            doctor_response: None,
            status: CaseStatus::Pending,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The slice of an open case the dialogue engine needs for lock checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCase {
    pub case_id: String,
    pub status: CaseStatus,
}

/// Partial update applied to an existing case. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseUpdate {
    pub summary: Option<String>,
    pub doctor_response: Option<String>,
    pub status: Option<CaseStatus>,
}

impl CaseUpdate {
    /// Update recorded when a patient answers a reviewer's question:
    /// the reply replaces the summary and the case goes back to the
    /// reviewer's queue.
    pub fn patient_reply(text: &str) -> Self {
        Self {
            summary: Some(format!("PATIENT REPLIED: {text}")),
            doctor_response: None,
            status: Some(CaseStatus::Pending),
        }
    }
}
