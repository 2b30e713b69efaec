use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;

/// Locate the References block in an article text export.
///
/// The block starts after a line consisting of "References" (case-insensitive)
/// and runs to the first trailing-section marker ("Download references",
/// "Acknowledgements", "Author information", "Rights and permissions",
/// "About this article", "This article is cited by") or to end of document
/// when no marker follows. Returns `None` when the heading is absent or the
/// block is empty after trimming — a recoverable not-found, not an error.
pub fn find_references_block(text: &str) -> Option<String> {
    find_references_block_with_config(text, &ParsingConfig::default())
}

/// Config-aware version of [`find_references_block`].
pub fn find_references_block_with_config(text: &str, config: &ParsingConfig) -> Option<String> {
    static HEADER_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\n[ \t]*References[ \t]*\r?\n").unwrap());

    static END_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?i)\n(?:Download references|Acknowledgements|Author information|Rights and permissions|About this article|This article is cited by)",
        )
        .unwrap()
    });

    let header_re = config.section_header_re.as_ref().unwrap_or(&HEADER_RE);
    let end_re = config.section_end_re.as_ref().unwrap_or(&END_RE);

    // Single-article exports carry one reference list; the first heading is
    // the real one even when a "cited by" tail repeats the word.
    let m = header_re.find(text)?;
    let rest = &text[m.end()..];

    let block = match end_re.find(rest) {
        Some(end_m) => &rest[..end_m.start()],
        None => rest,
    };

    let block = block.trim();
    if block.is_empty() {
        None
    } else {
        Some(block.to_string())
    }
}
