use thiserror::Error;

pub mod classify;
pub mod config;
pub mod fields;
pub mod section;
pub mod splitter;

pub use classify::ReviewClassifier;
pub use config::{ConfigError, ParsingConfig, ParsingConfigBuilder, REVIEW_JOURNAL_PATTERNS};
pub use fields::ParsedFields;

/// One citation entry parsed out of a document's References section.
///
/// Every field except `raw` is best-effort: `None` means the heuristic could
/// not locate the field, an accepted degraded result rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// The reconstructed single-line citation text.
    pub raw: String,
    /// First period-space segment.
    pub authors: Option<String>,
    /// Second period-space segment, trailing periods stripped.
    pub title: Option<String>,
    /// Venue substring between title and year, trailing periods stripped.
    pub journal: Option<String>,
    /// Exactly four ASCII digits when present.
    pub year: Option<String>,
    /// Whether `journal` matches a review-journal pattern.
    pub is_review: bool,
}

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("no references section found")]
    NoReferencesSection,
}

/// Extract and classify all citation entries from a document's text.
///
/// Pipeline:
/// 1. Locate the References block
/// 2. Split it into deduplicated single-line entries
/// 3. Parse authors/title/journal/year from each entry
/// 4. Flag entries whose journal matches a review-journal pattern
///
/// The only error is a structurally absent References section; per-entry
/// parse failures degrade to empty fields.
pub fn extract_references(text: &str) -> Result<Vec<ParsedReference>, ParsingError> {
    extract_references_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`extract_references`].
pub fn extract_references_with_config(
    text: &str,
    config: &ParsingConfig,
) -> Result<Vec<ParsedReference>, ParsingError> {
    let block = section::find_references_block_with_config(text, config)
        .ok_or(ParsingError::NoReferencesSection)?;

    let entries = splitter::split_entries_with_config(&block, config);
    tracing::debug!(count = entries.len(), "segmented reference entries");

    let classifier = ReviewClassifier::with_config(config);
    let references: Vec<ParsedReference> = entries
        .into_iter()
        .map(|raw| {
            let parsed = fields::parse_reference_line(&raw);
            let is_review = parsed
                .journal
                .as_deref()
                .is_some_and(|j| classifier.is_review(j));
            ParsedReference {
                raw,
                authors: parsed.authors,
                title: parsed.title,
                journal: parsed.journal,
                year: parsed.year,
                is_review,
            }
        })
        .collect();

    tracing::debug!(
        total = references.len(),
        reviews = references.iter().filter(|r| r.is_review).count(),
        "classified reference entries"
    );
    Ok(references)
}
