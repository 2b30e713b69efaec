use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{ParsingConfig, REVIEW_JOURNAL_PATTERNS};

static REVIEW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", REVIEW_JOURNAL_PATTERNS.join("|"))).unwrap()
});

/// Flags journal names whose venue predominantly publishes review articles.
///
/// A single combined-pattern membership test: no scoring, no confidence,
/// strictly boolean.
#[derive(Debug, Clone)]
pub struct ReviewClassifier {
    re: Regex,
}

impl ReviewClassifier {
    /// Classifier over the built-in pattern list.
    pub fn new() -> Self {
        Self {
            re: REVIEW_RE.clone(),
        }
    }

    /// Classifier honoring a config-supplied pattern list, falling back to
    /// the built-in one.
    pub fn with_config(config: &ParsingConfig) -> Self {
        match &config.review_re {
            Some(re) => Self { re: re.clone() },
            None => Self::new(),
        }
    }

    /// Whether `journal` names a review venue. Empty input is never a match.
    pub fn is_review(&self, journal: &str) -> bool {
        !journal.is_empty() && self.re.is_match(journal)
    }
}

impl Default for ReviewClassifier {
    fn default() -> Self {
        Self::new()
    }
}
