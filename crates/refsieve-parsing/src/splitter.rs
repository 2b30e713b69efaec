use std::collections::HashSet;

use crate::config::ParsingConfig;

/// Split a References block into deduplicated single-line citation entries.
///
/// Lines accumulate until a metadata-marker line (citation-service decoration
/// such as "Article  Google Scholar") flushes them; only the most recent
/// accumulated line is emitted as the entry. Blank lines neither flush nor
/// contribute, so citations wrapped across blank-separated lines still merge
/// through non-blank accumulation. First-occurrence order is preserved.
pub fn split_entries(block: &str) -> Vec<String> {
    split_entries_with_config(block, &ParsingConfig::default())
}

/// Config-aware version of [`split_entries`].
pub fn split_entries_with_config(block: &str, config: &ParsingConfig) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in block.lines() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }
        if is_metadata_marker(stripped, config) {
            // Marker lines never become entries themselves.
            flush(&mut current, &mut entries);
        } else {
            current.push(stripped);
        }
    }
    flush(&mut current, &mut entries);

    dedup_preserving_order(entries)
}

/// Whether a line is citation-service decoration rather than citation text.
///
/// Substring matching is exact and case-sensitive; a bare "CAS" inside
/// ordinary text still triggers (known imprecision of the source format).
fn is_metadata_marker(line: &str, config: &ParsingConfig) -> bool {
    config
        .marker_prefixes()
        .iter()
        .any(|p| line.starts_with(p.as_str()))
        || config
            .marker_substrings()
            .iter()
            .any(|s| line.contains(s.as_str()))
}

/// Emit the most recent accumulated line as the canonical citation text.
///
/// Linking-service footers directly follow the true citation line, so the
/// last line before the marker is the citation; earlier wrapped lines are
/// dropped rather than concatenated.
fn flush(current: &mut Vec<&str>, entries: &mut Vec<String>) {
    if let Some(core_line) = current.iter().rev().find(|l| !l.trim().is_empty()) {
        entries.push(core_line.trim().to_string());
    }
    current.clear();
}

/// Deduplicate by exact string equality, keeping first occurrences in order.
fn dedup_preserving_order(entries: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|e| seen.insert(e.clone()))
        .collect()
}
