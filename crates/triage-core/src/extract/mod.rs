//! Slot extraction engine.
//!
//! Applies two cross-cutting rules (duration, severity) and then the
//! active category's ordered cascade against a single utterance. Every
//! rule is independent: several can fire on one utterance, each writing
//! its own slot. Negated matches are stored with a `"no "` prefix and
//! never escalate urgency.

mod negation;
mod rules;

pub use negation::NegationDetector;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::{slots, Category, Clipboard, Urgency};

use rules::{RedirectProbe, SlotRule};

/// Duration: a count or quantifier word followed by a time unit.
const DURATION_PATTERN: &str = r"(\d+|one|two|three|few|several)\s*(day|week|month|hour|min)s?";

/// Default severity pattern: descriptive words, an N/10 score, or
/// "level/score/pain N". The one knob meant to be tuned per deployment;
/// see [`Extractor::with_severity_pattern`].
pub const DEFAULT_SEVERITY_PATTERN: &str =
    r"(mild|moderate|severe|sharp|dull|excruciating|bad)|(\d+\s*/\s*10)|(level|score|pain)\s+(\d+)";

/// What an extraction pass decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Normal return; the clipboard holds whatever was found.
    Continue,
    /// The utterance belongs to another category; the controller must
    /// switch and re-run extraction there.
    Redirect(Category),
}

/// Compiled extraction rules for all categories.
///
/// Construction compiles every pattern once; extraction itself is pure
/// in-memory matching over one utterance.
pub struct Extractor {
    negation: NegationDetector,
    duration: Regex,
    severity: Regex,
    gastro: Vec<SlotRule>,
    respiratory: Vec<SlotRule>,
    neuro: Vec<SlotRule>,
    ortho: Vec<SlotRule>,
    derma: Vec<SlotRule>,
    systemic: Vec<SlotRule>,
    redirects: Vec<RedirectProbe>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Extractor with the default severity pattern.
    pub fn new() -> Self {
        Self::with_severity_pattern(DEFAULT_SEVERITY_PATTERN)
            .expect("default severity pattern is valid")
    }

    /// Extractor with a deployment-specific severity pattern.
    pub fn with_severity_pattern(severity_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            negation: NegationDetector::new(),
            duration: Regex::new(DURATION_PATTERN).expect("duration pattern is valid"),
            severity: Regex::new(severity_pattern)?,
            gastro: rules::gastro_rules(),
            respiratory: rules::respiratory_rules(),
            neuro: rules::neuro_rules(),
            ortho: rules::ortho_rules(),
            derma: rules::derma_rules(),
            systemic: rules::systemic_rules(),
            redirects: rules::redirect_probes(),
        })
    }

    /// Run the cross-cutting rules and the category's cascade against
    /// one utterance, filling the clipboard in place.
    ///
    /// Only GENERAL_SYSTEMIC can return [`Extraction::Redirect`]: its
    /// redirect probes run after the standard cascade, so facts matched
    /// by the systemic rules are kept even when the turn redirects.
    pub fn extract(&self, text: &str, category: Category, clipboard: &mut Clipboard) -> Extraction {
        let text = text.to_lowercase();

        if let Some(m) = self.duration.find(&text) {
            clipboard.set(slots::DURATION, m.as_str());
        }
        if let Some(m) = self.severity.find(&text) {
            clipboard.set(slots::SEVERITY, m.as_str());
        }

        // Within one cascade the last red flag to fire wins (cascade
        // order is deliberate); merging into the clipboard then never
        // downgrades a level set on an earlier turn.
        let mut flagged = None;
        for rule in self.cascade(category) {
            self.apply(rule, &text, clipboard, &mut flagged);
        }
        if let Some(level) = flagged {
            clipboard.escalate(level);
        }

        if category == Category::GeneralSystemic {
            for probe in &self.redirects {
                if probe.pattern.is_match(&text) {
                    debug!(target = %probe.target, "category redirect detected");
                    return Extraction::Redirect(probe.target);
                }
            }
        }

        Extraction::Continue
    }

    fn cascade(&self, category: Category) -> &[SlotRule] {
        match category {
            Category::Gastrointestinal => &self.gastro,
            Category::Respiratory => &self.respiratory,
            Category::Neurological => &self.neuro,
            Category::Orthopedic => &self.ortho,
            Category::Dermatological => &self.derma,
            Category::GeneralSystemic => &self.systemic,
        }
    }

    fn apply(
        &self,
        rule: &SlotRule,
        text: &str,
        clipboard: &mut Clipboard,
        flagged: &mut Option<Urgency>,
    ) {
        let Some(m) = rule.pattern.find(text) else {
            return;
        };
        let negated = self.negation.is_negated(text, m.start());
        if negated {
            clipboard.set(rule.slot, format!("no {}", m.as_str()));
        } else {
            clipboard.set(rule.slot, m.as_str());
        }

        if let Some(trigger) = &rule.trigger {
            let probe_hit = trigger.probe.as_ref().map_or(true, |p| p.is_match(text));
            if !negated && probe_hit {
                *flagged = Some(trigger.level);
                warn!(slot = rule.slot, level = %trigger.level, "red flag: {}", trigger.alert);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    fn extract(text: &str, category: Category) -> Clipboard {
        let mut clipboard = Clipboard::new();
        Extractor::new().extract(text, category, &mut clipboard);
        clipboard
    }

    #[test]
    fn test_duration_and_severity_run_for_every_category() {
        for category in Category::ALL {
            let clip = extract("it has been severe for 2 days", category);
            assert_eq!(clip.get("duration"), Some("2 days"), "{category}");
            assert_eq!(clip.get("severity"), Some("severe"), "{category}");
        }
    }

    #[test]
    fn test_duration_quantifier_words() {
        let clip = extract("this started a few weeks ago", Category::Gastrointestinal);
        assert_eq!(clip.get("duration"), Some("few weeks"));
    }

    #[test]
    fn test_severity_score_forms() {
        let clip = extract("the pain is 8/10", Category::Orthopedic);
        assert_eq!(clip.get("severity"), Some("8/10"));

        let clip = extract("i would say pain 7 right now", Category::Orthopedic);
        assert_eq!(clip.get("severity"), Some("pain 7"));
    }

    #[test]
    fn test_custom_severity_pattern() {
        let extractor = Extractor::with_severity_pattern(r"(unbearable|agonizing)").unwrap();
        let mut clip = Clipboard::new();
        extractor.extract("it is unbearable", Category::Gastrointestinal, &mut clip);
        assert_eq!(clip.get("severity"), Some("unbearable"));
    }

    #[test]
    fn test_invalid_severity_pattern_is_rejected() {
        assert!(Extractor::with_severity_pattern(r"(unclosed").is_err());
    }

    #[test]
    fn test_negated_match_gets_prefix() {
        let clip = extract("no vomiting today", Category::Gastrointestinal);
        assert_eq!(clip.get("vomiting"), Some("no vomit"));

        let clip = extract("vomiting since morning", Category::Gastrointestinal);
        assert_eq!(clip.get("vomiting"), Some("vomit"));
    }

    #[test]
    fn test_multiple_rules_fire_on_one_utterance() {
        let clip = extract(
            "vomiting and diarrhea after some spicy food",
            Category::Gastrointestinal,
        );
        assert_eq!(clip.get("vomiting"), Some("vomit"));
        assert_eq!(clip.get("bowel"), Some("diarrhea"));
        assert_eq!(clip.get("triggers"), Some("spicy"));
    }

    #[test]
    fn test_gi_blood_escalates_critical() {
        let clip = extract("there is blood in my stool", Category::Gastrointestinal);
        assert_eq!(clip.get("stool_color"), Some("blood"));
        assert_eq!(clip.urgency(), Some(Urgency::Critical));
    }

    #[test]
    fn test_negated_blood_does_not_escalate() {
        let clip = extract("there is no blood in my stool", Category::Gastrointestinal);
        assert_eq!(clip.get("stool_color"), Some("no blood"));
        assert_eq!(clip.urgency(), None);
    }

    #[test]
    fn test_hemoptysis_needs_probe_hit() {
        // Sputum mention without blood language stays unescalated.
        let clip = extract("coughing up green mucus", Category::Respiratory);
        assert_eq!(clip.get("sputum"), Some("green"));
        assert_eq!(clip.urgency(), None);

        let clip = extract("coughing up pink sputum", Category::Respiratory);
        assert_eq!(clip.urgency(), Some(Urgency::Critical));
    }

    #[test]
    fn test_compound_fracture_flag() {
        let clip = extract("the bone sticking out of my shin", Category::Orthopedic);
        assert_eq!(clip.urgency(), Some(Urgency::Critical));
    }

    #[test]
    fn test_anaphylaxis_flag_is_unconditional() {
        let clip = extract("my throat is closing up", Category::Dermatological);
        assert_eq!(clip.get("systemic"), Some("throat"));
        assert_eq!(clip.urgency(), Some(Urgency::Critical));
    }

    #[test]
    fn test_last_write_urgency_within_cascade() {
        // bleeding (CRITICAL) fires before infection_signs (HIGH); the
        // later rule wins. This asserts documented cascade order, not
        // highest-wins.
        let clip = extract(
            "blood is gushing and i see red streaks",
            Category::Dermatological,
        );
        assert_eq!(clip.urgency(), Some(Urgency::High));
    }

    #[test]
    fn test_later_turn_never_downgrades_urgency() {
        let extractor = Extractor::new();
        let mut clip = Clipboard::new();
        extractor.extract("there is blood in my stool", Category::Gastrointestinal, &mut clip);
        assert_eq!(clip.urgency(), Some(Urgency::Critical));

        // A later utterance whose cascade only reaches HIGH leaves the
        // conversation at CRITICAL.
        extractor.extract(
            "i see red streaks on my arm",
            Category::Dermatological,
            &mut clip,
        );
        assert_eq!(clip.urgency(), Some(Urgency::Critical));
    }

    #[test]
    fn test_systemic_redirect_fires_after_slot_filling() {
        let mut clip = Clipboard::new();
        let outcome = Extractor::new().extract(
            "i feel feverish and keep vomiting",
            Category::GeneralSystemic,
            &mut clip,
        );
        assert_eq!(outcome, Extraction::Redirect(Category::Gastrointestinal));
        // Systemic slots filled before the redirect returned.
        assert_eq!(clip.get("assessment"), Some("fever"));
    }

    #[test]
    fn test_redirect_first_listed_category_wins() {
        let mut clip = Clipboard::new();
        let outcome = Extractor::new().extract(
            "vomiting and wheezing at the same time",
            Category::GeneralSystemic,
            &mut clip,
        );
        // GI probe is checked before respiratory.
        assert_eq!(outcome, Extraction::Redirect(Category::Gastrointestinal));
    }

    #[test]
    fn test_redirect_only_from_general_systemic() {
        let mut clip = Clipboard::new();
        let outcome = Extractor::new().extract(
            "there is a rash near the wound",
            Category::Dermatological,
            &mut clip,
        );
        assert_eq!(outcome, Extraction::Continue);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = Extractor::new();
        let text = "severe stomach pain, vomiting for 2 days, no blood";

        let mut once = Clipboard::new();
        extractor.extract(text, Category::Gastrointestinal, &mut once);

        let mut twice = once.clone();
        extractor.extract(text, Category::Gastrointestinal, &mut twice);

        assert_eq!(once, twice);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Re-running extraction with identical input never changes
            // the clipboard further, for any utterance and category.
            #[test]
            fn extraction_idempotent(text in ".{0,80}", idx in 0usize..6) {
                let category = Category::ALL[idx];
                let extractor = Extractor::new();

                let mut once = Clipboard::new();
                extractor.extract(&text, category, &mut once);
                let mut twice = once.clone();
                extractor.extract(&text, category, &mut twice);

                prop_assert_eq!(once, twice);
            }

            // Extraction never panics on arbitrary (incl. multibyte) input.
            #[test]
            fn extraction_total(text in "\\PC{0,120}") {
                let mut clipboard = Clipboard::new();
                Extractor::new().extract(&text, Category::GeneralSystemic, &mut clipboard);
            }
        }
    }
}
