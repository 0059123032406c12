//! The clipboard: accumulated structured facts for one conversation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Urgency;

/// Slot names shared across categories.
pub mod slots {
    pub const DURATION: &str = "duration";
    pub const SEVERITY: &str = "severity";
    pub const TRIGGERS: &str = "triggers";
    pub const SENSATION: &str = "sensation";
    pub const SPREAD: &str = "spread";
}

/// Fact store for one conversation.
///
/// Facts are keyed by slot name and survive sub-group and category
/// switches: extractors only ever add or replace values for their own
/// slot, never remove what an earlier turn gathered. The urgency flag is
/// a typed field rather than a reserved map key; it only ever goes up
/// over the life of a conversation (see [`Clipboard::escalate`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clipboard {
    facts: BTreeMap<String, String>,
    urgency: Option<Urgency>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a fact by slot name.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.facts.get(slot).map(String::as_str)
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.facts.contains_key(slot)
    }

    /// Store a fact, replacing any earlier value for the same slot.
    pub fn set(&mut self, slot: &str, value: impl Into<String>) {
        self.facts.insert(slot.to_string(), value.into());
    }

    /// Raise the escalation flag. Escalation only goes up: a turn that
    /// found a HIGH flag cannot downgrade a CRITICAL set earlier in the
    /// conversation.
    pub fn escalate(&mut self, level: Urgency) {
        self.urgency = Some(match self.urgency {
            Some(current) => current.max(level),
            None => level,
        });
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    /// Final urgency for a case record; `Normal` when nothing escalated.
    pub fn urgency_or_normal(&self) -> Urgency {
        self.urgency.unwrap_or(Urgency::Normal)
    }

    /// Iterate facts in slot-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.facts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
