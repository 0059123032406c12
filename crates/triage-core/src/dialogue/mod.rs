//! Dialogue controller: one entry point per patient utterance.
//!
//! A turn runs through a fixed pipeline: open-case lock check, session
//! checkout, yes/no context resolution, sub-group routing, slot
//! extraction (with a possible category redirect), and finally either the
//! next question or case finalization. Sessions live in memory; only
//! finalized cases reach the record store.

mod classifier;
mod router;

pub use classifier::classify;
pub use router::route;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use rand::seq::SliceRandom;
use regex::Regex;
use tracing::{debug, info};

use crate::extract::{Extraction, Extractor};
use crate::models::{slots, CaseStatus, CaseUpdate, Consultation, Session, SubGroup, Urgency};
use crate::store::{RecordStore, StoreError};
use crate::summary::summarize;
use crate::taxonomy;

const NO_PATTERN: &str = r"\b(no|nah|not|nope)\b";
const YES_PATTERN: &str = r"\b(yes|yeah|yep|sure)\b";

/// Errors from the dialogue engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A second turn arrived for a user whose previous turn has not
    /// finished. The caller should retry after the first turn returns.
    #[error("a turn is already in flight for user {0}")]
    TurnInFlight(String),

    #[error("session table lock poisoned")]
    LockPoisoned,
}

pub type EngineResult<T> = Result<T, EngineError>;

/// What one turn produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Next question to put to the patient. `None` once intake is over
    /// or the user is waiting on a reviewer.
    pub question: Option<String>,
    /// Final escalation level; set only on the finalizing turn.
    pub urgency: Option<Urgency>,
    /// True when the user has an open case and intake is closed to them.
    pub locked: bool,
}

/// A user's slot in the session table. `Busy` marks a turn in flight so
/// a concurrent turn for the same user is rejected instead of racing.
enum SessionSlot {
    Idle(Session),
    Busy,
}

/// The slot-filling intake engine.
///
/// Generic over its record store so tests can run fully in memory.
pub struct IntakeEngine<S: RecordStore> {
    store: S,
    extractor: Extractor,
    sessions: Mutex<HashMap<String, SessionSlot>>,
    no_pattern: Regex,
    yes_pattern: Regex,
}

impl<S: RecordStore> IntakeEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_extractor(store, Extractor::new())
    }

    /// Engine with a customized extractor (e.g. a tuned severity
    /// pattern).
    pub fn with_extractor(store: S, extractor: Extractor) -> Self {
        Self {
            store,
            extractor,
            sessions: Mutex::new(HashMap::new()),
            no_pattern: Regex::new(NO_PATTERN).expect("no-pattern is valid"),
            yes_pattern: Regex::new(YES_PATTERN).expect("yes-pattern is valid"),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether intake is currently closed to this user because a case of
    /// theirs is still with the reviewer.
    pub fn is_locked(&self, user_id: &str) -> EngineResult<bool> {
        Ok(self.store.find_open_case(user_id)?.is_some())
    }

    /// Process one patient utterance.
    pub fn start_or_continue(&self, user_id: &str, text: &str) -> EngineResult<TurnOutcome> {
        if let Some(open) = self.store.find_open_case(user_id)? {
            match open.status {
                CaseStatus::Pending => {
                    debug!(user_id, case_id = %open.case_id, "turn while case pending");
                    return Ok(TurnOutcome { question: None, urgency: None, locked: true });
                }
                CaseStatus::NeedsInfo => {
                    // Relay the utterance to the reviewer; the dialogue
                    // engine never sees it.
                    self.store
                        .update_case(&open.case_id, &CaseUpdate::patient_reply(text))?;
                    self.sessions_lock()?.remove(user_id);
                    info!(user_id, case_id = %open.case_id, "patient reply relayed");
                    return Ok(TurnOutcome { question: None, urgency: None, locked: true });
                }
                CaseStatus::Completed => {}
            }
        }

        let mut session = self.checkout(user_id, text)?;

        self.resolve_context(&mut session, text);

        if session.sub_group == SubGroup::Default {
            let sub = route(text, session.category);
            if sub != SubGroup::Default {
                session.sub_group = sub;
            }
        }

        if let Extraction::Redirect(target) =
            self.extractor
                .extract(text, session.category, &mut session.clipboard)
        {
            info!(user_id, from = %session.category, to = %target, "redirecting session");
            session.redirect_to(target);
            let sub = route(text, target);
            if sub != SubGroup::Default {
                session.sub_group = sub;
            }
            // Re-extract under the new category; only GENERAL_SYSTEMIC
            // redirects, so this cannot recurse.
            self.extractor
                .extract(text, target, &mut session.clipboard);
        }

        let bank = taxonomy::question_bank(session.category, session.sub_group);
        let next = bank
            .iter()
            .find(|(slot, _)| !session.clipboard.contains(slot));

        if let Some((slot, questions)) = next {
            if let Some(question) = questions.choose(&mut rand::thread_rng()) {
                session.last_slot = Some(slot.to_string());
                let outcome = TurnOutcome {
                    question: Some((*question).to_string()),
                    urgency: None,
                    locked: false,
                };
                self.checkin(user_id, session)?;
                return Ok(outcome);
            }
        }

        // Every slot answered (or nothing to ask): finalize.
        let summary = summarize(&session.clipboard, session.category);
        let case = Consultation::new(
            user_id,
            summary,
            session.category,
            session.clipboard.urgency_or_normal(),
        );
        if let Err(err) = self.store.create_case(&case) {
            // Keep the session so the user can retry the turn.
            self.checkin(user_id, session)?;
            return Err(err.into());
        }
        self.sessions_lock()?.remove(user_id);
        info!(user_id, case_id = %case.case_id, urgency = %case.urgency, "intake finalized");
        Ok(TurnOutcome {
            question: None,
            urgency: Some(case.urgency),
            locked: true,
        })
    }

    /// Interpret a bare yes/no against the slot the previous question
    /// asked about. "No" gets a slot-appropriate canned value ("no" to a
    /// severity question means mild, not missing); "yes" and anything
    /// mixed in with it keeps the literal utterance. Checked before
    /// extraction so the asked slot is filled even when no pattern
    /// matches the reply.
    fn resolve_context(&self, session: &mut Session, text: &str) {
        let Some(slot) = session.last_slot.clone() else {
            return;
        };
        let lowered = text.to_lowercase();
        if self.no_pattern.is_match(&lowered) {
            let value = match slot.as_str() {
                slots::SEVERITY => "mild symptoms".to_string(),
                slots::TRIGGERS => "no known triggers".to_string(),
                slots::SENSATION => "no pain or burning".to_string(),
                slots::SPREAD => "no spread".to_string(),
                _ => text.to_string(),
            };
            debug!(slot = %slot, "negative context answer");
            session.clipboard.set(&slot, value);
        } else if self.yes_pattern.is_match(&lowered) {
            debug!(slot = %slot, "affirmative context answer");
            session.clipboard.set(&slot, text);
        }
    }

    fn sessions_lock(&self) -> EngineResult<MutexGuard<'_, HashMap<String, SessionSlot>>> {
        self.sessions.lock().map_err(|_| EngineError::LockPoisoned)
    }

    /// Take the user's session out of the table, creating one (with the
    /// category classified from this utterance) if none exists. The slot
    /// is left `Busy` until checkin.
    fn checkout(&self, user_id: &str, text: &str) -> EngineResult<Session> {
        let mut sessions = self.sessions_lock()?;
        match sessions.insert(user_id.to_string(), SessionSlot::Busy) {
            None => Ok(Session::new(user_id, classify(text))),
            Some(SessionSlot::Idle(session)) => Ok(session),
            Some(SessionSlot::Busy) => Err(EngineError::TurnInFlight(user_id.to_string())),
        }
    }

    fn checkin(&self, user_id: &str, session: Session) -> EngineResult<()> {
        self.sessions_lock()?
            .insert(user_id.to_string(), SessionSlot::Idle(session));
        Ok(())
    }

    #[cfg(test)]
    fn session_snapshot(&self, user_id: &str) -> Option<Session> {
        match self.sessions.lock().unwrap().get(user_id) {
            Some(SessionSlot::Idle(session)) => Some(session.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Barrier};

    use super::*;
    use crate::models::{Category, OpenCase, SubGroup};
    use crate::store::{SqliteStore, StoreResult};

    fn engine() -> IntakeEngine<SqliteStore> {
        IntakeEngine::new(SqliteStore::open_in_memory().unwrap())
    }

    /// Store whose first `create_case` fails, then recovers.
    struct FlakyStore {
        failed_once: AtomicBool,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self { failed_once: AtomicBool::new(false) }
        }
    }

    impl RecordStore for FlakyStore {
        fn find_open_case(&self, _user_id: &str) -> StoreResult<Option<OpenCase>> {
            Ok(None)
        }

        fn create_case(&self, _case: &Consultation) -> StoreResult<()> {
            if self.failed_once.swap(true, Ordering::SeqCst) {
                Ok(())
            } else {
                Err(StoreError::LockPoisoned)
            }
        }

        fn update_case(&self, _case_id: &str, _update: &CaseUpdate) -> StoreResult<()> {
            Ok(())
        }
    }

    /// Store whose `create_case` parks on two barriers so a test can
    /// observe the engine mid-turn.
    struct BlockingStore {
        entered: Arc<Barrier>,
        release: Arc<Barrier>,
    }

    impl RecordStore for BlockingStore {
        fn find_open_case(&self, _user_id: &str) -> StoreResult<Option<OpenCase>> {
            Ok(None)
        }

        fn create_case(&self, _case: &Consultation) -> StoreResult<()> {
            self.entered.wait();
            self.release.wait();
            Ok(())
        }

        fn update_case(&self, _case_id: &str, _update: &CaseUpdate) -> StoreResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_turn_classifies_routes_and_asks() {
        let engine = engine();
        let outcome = engine
            .start_or_continue("user-1", "I have severe stomach pain and vomiting for 2 days")
            .unwrap();
        assert!(outcome.question.is_some());
        assert!(!outcome.locked);

        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.category, Category::Gastrointestinal);
        assert_eq!(session.sub_group, SubGroup::Stomach);
        assert_eq!(session.clipboard.get("duration"), Some("2 days"));
        assert_eq!(session.clipboard.get("severity"), Some("severe"));
        assert_eq!(session.clipboard.get("vomiting"), Some("vomit"));
    }

    #[test]
    fn test_question_targets_first_unfilled_slot() {
        let engine = engine();
        engine
            .start_or_continue("user-1", "I have severe stomach pain and vomiting for 2 days")
            .unwrap();
        // duration, vomiting, severity are filled; triggers comes next.
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.last_slot.as_deref(), Some("triggers"));
    }

    #[test]
    fn test_no_answer_uses_canned_value_for_known_slots() {
        let engine = engine();
        engine
            .start_or_continue("user-1", "I have severe stomach pain and vomiting for 2 days")
            .unwrap();
        engine.start_or_continue("user-1", "no").unwrap();
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.clipboard.get("triggers"), Some("no known triggers"));
    }

    #[test]
    fn test_no_answer_keeps_literal_text_for_other_slots() {
        let engine = engine();
        // Esophagus bank starts with the swallowing slot.
        engine
            .start_or_continue("user-1", "stomach acid keeps coming up")
            .unwrap();
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.sub_group, SubGroup::Esophagus);
        assert_eq!(session.last_slot.as_deref(), Some("swallowing"));

        engine
            .start_or_continue("user-1", "no, it doesn't hurt when I swallow")
            .unwrap();
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(
            session.clipboard.get("swallowing"),
            Some("no, it doesn't hurt when I swallow")
        );
    }

    #[test]
    fn test_redirect_keeps_collected_facts() {
        let engine = engine();
        let outcome = engine
            .start_or_continue("user-1", "I have felt unwell for 3 days")
            .unwrap();
        assert!(outcome.question.is_some());
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.category, Category::GeneralSystemic);
        assert_eq!(session.clipboard.get("duration"), Some("3 days"));

        engine.start_or_continue("user-1", "now I keep vomiting too").unwrap();
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.category, Category::Gastrointestinal);
        assert_eq!(session.sub_group, SubGroup::Stomach);
        assert_eq!(session.clipboard.get("duration"), Some("3 days"));
        assert_eq!(session.clipboard.get("vomiting"), Some("vomit"));
    }

    #[test]
    fn test_pending_case_locks_intake() {
        let engine = engine();
        let case = Consultation::new(
            "user-1",
            "Patient reports GI symptoms.",
            Category::Gastrointestinal,
            Urgency::Normal,
        );
        engine.store().create_case(&case).unwrap();

        let outcome = engine.start_or_continue("user-1", "hello?").unwrap();
        assert!(outcome.locked);
        assert!(outcome.question.is_none());
        assert!(engine.is_locked("user-1").unwrap());
    }

    #[test]
    fn test_needs_info_relays_reply() {
        let engine = engine();
        let case = Consultation::new(
            "user-1",
            "Patient reports GI symptoms.",
            Category::Gastrointestinal,
            Urgency::Normal,
        );
        engine.store().create_case(&case).unwrap();
        engine
            .store()
            .update_case(
                &case.case_id,
                &CaseUpdate {
                    doctor_response: Some("Any fever?".to_string()),
                    status: Some(CaseStatus::NeedsInfo),
                    ..Default::default()
                },
            )
            .unwrap();

        let outcome = engine.start_or_continue("user-1", "yes, since last night").unwrap();
        assert!(outcome.locked);

        let open = engine.store().find_open_case("user-1").unwrap().unwrap();
        assert_eq!(open.status, CaseStatus::Pending);
    }

    #[test]
    fn test_interview_ends_with_a_case() {
        let engine = engine();
        let mut turns = 0;
        let mut outcome = engine
            .start_or_continue("user-1", "I have severe stomach pain and vomiting for 2 days")
            .unwrap();
        while outcome.question.is_some() {
            turns += 1;
            assert!(turns < 20, "interview did not terminate");
            outcome = engine.start_or_continue("user-1", "no").unwrap();
        }
        assert!(outcome.locked);
        assert_eq!(outcome.urgency, Some(Urgency::Normal));
        assert!(engine.store().find_open_case("user-1").unwrap().is_some());
        assert!(engine.session_snapshot("user-1").is_none());
    }

    #[test]
    fn test_store_failure_keeps_session_so_the_turn_can_be_retried() {
        // "i feel sick" fills the only slot of the systemic default
        // bank, so the first turn goes straight to finalization.
        let engine = IntakeEngine::new(FlakyStore::new());
        let err = engine.start_or_continue("user-1", "i feel sick").unwrap_err();
        assert!(matches!(err, EngineError::Store(_)));

        // Session and clipboard survived the failed write.
        let session = engine.session_snapshot("user-1").unwrap();
        assert_eq!(session.clipboard.get("assessment"), Some("sick"));

        // Repeating the same turn finalizes once the store recovers.
        let outcome = engine.start_or_continue("user-1", "i feel sick").unwrap();
        assert!(outcome.locked);
        assert_eq!(outcome.urgency, Some(Urgency::Normal));
        assert!(engine.session_snapshot("user-1").is_none());
    }

    #[test]
    fn test_overlapping_turn_for_same_user_is_rejected() {
        let entered = Arc::new(Barrier::new(2));
        let release = Arc::new(Barrier::new(2));
        let engine = IntakeEngine::new(BlockingStore {
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
        });

        std::thread::scope(|scope| {
            let first = scope.spawn(|| engine.start_or_continue("user-1", "i feel sick"));

            // Wait until the first turn is parked inside create_case,
            // holding the user's session slot.
            entered.wait();
            let err = engine.start_or_continue("user-1", "also my arm hurts").unwrap_err();
            assert!(matches!(err, EngineError::TurnInFlight(_)));

            release.wait();
            let outcome = first.join().unwrap().unwrap();
            assert!(outcome.locked);
        });
    }
}
