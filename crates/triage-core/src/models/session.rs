//! Per-user conversation state.

use serde::{Deserialize, Serialize};

use super::category::{Category, SubGroup};
use super::clipboard::Clipboard;

/// In-flight conversation state for one user.
///
/// At most one session exists per user id; it is created on the first
/// utterance when no open case blocks intake, and discarded when the
/// case is finalized or the user replies to a reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user identifier; doubles as the session key.
    pub user_id: String,
    /// Active body-system category (may change on redirect).
    pub category: Category,
    /// Active sub-group; `Default` until the router finds a match.
    pub sub_group: SubGroup,
    /// Facts gathered so far.
    pub clipboard: Clipboard,
    /// Slot the previous turn's question targeted, for yes/no context.
    pub last_slot: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Session {
    /// Start a fresh session in the given category.
    pub fn new(user_id: impl Into<String>, category: Category) -> Self {
        Self {
            user_id: user_id.into(),
            category,
            sub_group: SubGroup::Default,
            clipboard: Clipboard::new(),
            last_slot: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Switch category after a redirect; sub-group goes back to
    /// `Default` so routing runs again, last-asked context is dropped,
    /// and the clipboard is kept as-is.
    pub fn redirect_to(&mut self, category: Category) {
        self.category = category;
        self.sub_group = SubGroup::Default;
        self.last_slot = None;
    }
}
