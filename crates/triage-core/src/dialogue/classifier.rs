//! One-shot complaint classification.
//!
//! The first utterance of a session is matched against an ordered list of
//! keyword rules. The first rule with any keyword present wins, so the list
//! order doubles as a priority ranking: a complaint mentioning both "cough"
//! and "stomach" lands in RESPIRATORY. Anything that matches nothing falls
//! through to GENERAL_SYSTEMIC, where redirect probes can move it later.

use crate::models::Category;

/// Keyword rules in priority order. Matching is plain substring containment
/// on the lowercased utterance, so "headache" is caught by "head".
const RULES: &[(&[&str], Category)] = &[
    (
        &["cough", "breath", "chest", "wheeze", "lung"],
        Category::Respiratory,
    ),
    (
        &["head", "dizzy", "migraine", "seizure", "vision", "faint"],
        Category::Neurological,
    ),
    (
        &["skin", "rash", "itch", "blister", "burn", "hives"],
        Category::Dermatological,
    ),
    (
        &["bone", "fracture", "knee", "back", "joint", "swollen"],
        Category::Orthopedic,
    ),
    (
        &["stomach", "vomit", "puke", "diarrhea", "nausea", "pain"],
        Category::Gastrointestinal,
    ),
];

/// Classify an opening complaint into a category.
///
/// Runs exactly once per session. Later utterances never re-classify; the
/// only way a session changes category afterwards is a redirect probe.
pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            tracing::debug!(%category, "classified complaint");
            return *category;
        }
    }
    Category::GeneralSystemic
}
