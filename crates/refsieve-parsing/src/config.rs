use regex::Regex;
use thiserror::Error;

/// Default patterns for journals that predominantly publish review articles.
pub const REVIEW_JOURNAL_PATTERNS: &[&str] = &[
    r"\bNature Reviews\b|\bNat(ure)?\.?\s+Rev\.",
    r"\bAnnual Review\b|\bAnnu\.?\s+Rev\.",
    // e.g. Trends Genet., Trends Mol. Med.
    r"\bTrends\b",
    r"\bCurr\.?\s+Opin\.|\bCurrent\s+Opinion\b",
    // Brief. Bioinform. and friends
    r"\bBrief\.?\b",
];

/// Default prefix tokens marking citation-service metadata lines.
pub const METADATA_MARKER_PREFIXES: &[&str] = &["Article"];

/// Default substrings marking citation-service metadata lines.
pub const METADATA_MARKER_SUBSTRINGS: &[&str] = &["Google Scholar", "PubMed", "CAS"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Immutable pattern configuration for the extraction pipeline.
///
/// Every field is optional; `None` means the built-in default applies. All
/// regexes are compiled by [`ParsingConfigBuilder::build`], so a bad pattern
/// fails there and never mid-pipeline.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfig {
    pub(crate) section_header_re: Option<Regex>,
    pub(crate) section_end_re: Option<Regex>,
    pub(crate) marker_prefixes: Option<Vec<String>>,
    pub(crate) marker_substrings: Option<Vec<String>>,
    pub(crate) review_re: Option<Regex>,
}

impl ParsingConfig {
    pub fn builder() -> ParsingConfigBuilder {
        ParsingConfigBuilder::new()
    }

    pub(crate) fn marker_prefixes(&self) -> &[String] {
        static DEFAULTS: once_cell::sync::Lazy<Vec<String>> = once_cell::sync::Lazy::new(|| {
            METADATA_MARKER_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        self.marker_prefixes.as_deref().unwrap_or(DEFAULTS.as_slice())
    }

    pub(crate) fn marker_substrings(&self) -> &[String] {
        static DEFAULTS: once_cell::sync::Lazy<Vec<String>> = once_cell::sync::Lazy::new(|| {
            METADATA_MARKER_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        self.marker_substrings.as_deref().unwrap_or(DEFAULTS.as_slice())
    }
}

/// Builder for [`ParsingConfig`].
#[derive(Debug, Default)]
pub struct ParsingConfigBuilder {
    section_header_regex: Option<String>,
    section_end_regex: Option<String>,
    marker_prefixes: Option<Vec<String>>,
    marker_substrings: Option<Vec<String>>,
    review_patterns: Option<Vec<String>>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the regex locating the References heading line.
    pub fn section_header_regex(mut self, re: impl Into<String>) -> Self {
        self.section_header_regex = Some(re.into());
        self
    }

    /// Override the regex locating the end-of-references marker.
    pub fn section_end_regex(mut self, re: impl Into<String>) -> Self {
        self.section_end_regex = Some(re.into());
        self
    }

    /// Replace the prefix tokens that mark metadata lines.
    pub fn marker_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marker_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the substrings that mark metadata lines.
    pub fn marker_substrings<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marker_substrings = Some(substrings.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the review-journal pattern list. Patterns are joined into one
    /// case-insensitive alternation.
    pub fn review_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.review_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<ParsingConfig, ConfigError> {
        let mut config = ParsingConfig {
            marker_prefixes: self.marker_prefixes,
            marker_substrings: self.marker_substrings,
            ..ParsingConfig::default()
        };
        if let Some(re) = self.section_header_regex {
            config.section_header_re = Some(Regex::new(&re)?);
        }
        if let Some(re) = self.section_end_regex {
            config.section_end_re = Some(Regex::new(&re)?);
        }
        if let Some(patterns) = self.review_patterns {
            config.review_re = Some(Regex::new(&format!("(?i){}", patterns.join("|")))?);
        }
        Ok(config)
    }
}
