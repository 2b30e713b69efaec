use once_cell::sync::Lazy;
use regex::Regex;

/// Best-effort fields recovered from one citation line.
///
/// `None` means the heuristic could not locate the field. The parser is
/// total: malformed input degrades, it never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub authors: Option<String>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub year: Option<String>,
}

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{4})\)").unwrap());

// Venue names end before the volume number, or before the first comma when
// no volume follows.
static JOURNAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s+\d|^(.+?)\s*,").unwrap());

/// Parse (authors, title, journal, year) from a single-line citation.
///
/// Assumes the dominant export pattern `Authors. Title. Journal vol, pages
/// (year).` — authors are the first period-space segment, the title the
/// second, and the journal sits between the title and the parenthesized
/// year. Trailing periods are stripped from title and journal.
pub fn parse_reference_line(line: &str) -> ParsedFields {
    let year = YEAR_RE.captures(line).map(|c| c[1].to_string());

    let parts: Vec<&str> = line
        .split(". ")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    let authors = parts.first().map(|p| p.to_string());
    // The unstripped segment is needed to re-locate the title inside the
    // line; trailing periods come off only in the returned field.
    let title_raw = parts.get(1).copied();

    let journal = match year.as_deref() {
        Some(y) => journal_before_year(line, title_raw.unwrap_or(""), y),
        None => parts.get(2).map(|p| p.to_string()),
    };

    ParsedFields {
        authors,
        title: title_raw.map(strip_trailing_periods),
        journal: journal.as_deref().map(strip_trailing_periods).filter(|j| !j.is_empty()),
        year,
    }
}

/// Capture the venue substring between the title and the `(year)` marker.
///
/// Degrades to `None` when the title cannot be re-located in the line.
fn journal_before_year(line: &str, title: &str, year: &str) -> Option<String> {
    let title_pos = line.find(title)?;
    let after_title = &line[title_pos + title.len()..];
    let after_title = after_title.trim_start_matches(['.', ' ']);

    let up_to_year = match after_title.split_once(&format!("({year})")) {
        Some((before, _)) => before,
        None => after_title,
    };
    let up_to_year = up_to_year.trim();

    let journal = match JOURNAL_RE.captures(up_to_year) {
        Some(caps) => caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().trim())
            .unwrap_or(up_to_year),
        None => up_to_year,
    };
    Some(journal.to_string())
}

fn strip_trailing_periods(s: impl AsRef<str>) -> String {
    s.as_ref().trim_end_matches('.').to_string()
}
