//! Negation detection for extraction matches.

use regex::Regex;

/// How far back (in bytes) to look for a negation word.
const LOOKBACK_WINDOW: usize = 20;

/// Detects whether the context immediately before a match negates it.
///
/// Scans a fixed window preceding the match for a closed set of negation
/// tokens as whole words. Negations further back than the window are
/// missed; that is an accepted precision tradeoff, not a reason to widen
/// the window.
pub struct NegationDetector {
    pattern: Regex,
}

impl Default for NegationDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl NegationDetector {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\b(no|not|dont|without|denies|never)\b")
                .expect("negation pattern is valid"),
        }
    }

    /// True if a negation word appears in the window before `match_start`.
    ///
    /// `match_start` is a byte offset into `text` (as reported by a
    /// regex match). A window that would begin mid-text simply carries
    /// less context; one that would begin mid-character is nudged
    /// forward to the next boundary.
    pub fn is_negated(&self, text: &str, match_start: usize) -> bool {
        let match_start = match_start.min(text.len());
        let mut window_start = match_start.saturating_sub(LOOKBACK_WINDOW);
        while !text.is_char_boundary(window_start) {
            window_start += 1;
        }
        self.pattern.is_match(&text[window_start..match_start])
    }
}
