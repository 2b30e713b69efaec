use std::io::Write;
use std::path::Path;

use thiserror::Error;

use refsieve_parsing::ParsedReference;

/// Trailing header column naming the classification method.
const METHOD_NOTE: &str = "note: heuristic journal-based detection (Nat/Nature Reviews, Annual Review, Trends, Current Opinion, Briefings)";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts returned to the caller after writing a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    /// All parsed entries, review or not.
    pub total: usize,
    /// Entries written to the table.
    pub reviews: usize,
}

fn csv_escape(s: &str) -> String {
    if s.contains('"') || s.contains(',') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    let mut row = fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Render the review-reference table as CSV text.
///
/// The header carries the five field columns plus the method note; each
/// `is_review` entry becomes one five-field row, in first-occurrence order.
pub fn export_csv(references: &[ParsedReference]) -> String {
    let mut out = csv_row(&[
        "authors",
        "year",
        "title",
        "journal",
        "raw_reference",
        METHOD_NOTE,
    ]);
    for r in references.iter().filter(|r| r.is_review) {
        out.push_str(&csv_row(&[
            r.authors.as_deref().unwrap_or(""),
            r.year.as_deref().unwrap_or(""),
            r.title.as_deref().unwrap_or(""),
            r.journal.as_deref().unwrap_or(""),
            &r.raw,
        ]));
    }
    out
}

/// Write the review-reference CSV to `path`, creating parent directories.
///
/// The file handle is scoped to this call and released on every exit path.
pub fn write_review_report(
    path: &Path,
    references: &[ParsedReference],
) -> Result<ReportStats, ReportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let content = export_csv(references);
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(ReportStats {
        total: references.len(),
        reviews: references.iter().filter(|r| r.is_review).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ref(journal: &str, is_review: bool) -> ParsedReference {
        ParsedReference {
            raw: format!("Author A. Some title. {} 1, 1 (2020).", journal),
            authors: Some("Author A".to_string()),
            title: Some("Some title".to_string()),
            journal: Some(journal.to_string()),
            year: Some("2020".to_string()),
            is_review,
        }
    }

    #[test]
    fn csv_escape_quotes() {
        assert_eq!(csv_escape(r#"He said "hi""#), r#""He said ""hi""""#);
    }

    #[test]
    fn csv_escape_comma() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
    }

    #[test]
    fn csv_escape_newline() {
        assert_eq!(csv_escape("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn csv_escape_clean() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn header_has_note_column() {
        let csv = export_csv(&[]);
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("authors,year,title,journal,raw_reference,"));
        // The note contains commas, so it must be quoted.
        assert!(header.contains("\"note: heuristic journal-based detection"));
    }

    #[test]
    fn only_review_entries_become_rows() {
        let refs = vec![
            make_ref("Journal X", false),
            make_ref("Trends Genet", true),
            make_ref("Cell", false),
        ];
        let csv = export_csv(&refs);
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("Trends Genet"));
    }

    #[test]
    fn row_field_order_is_fixed() {
        let refs = vec![make_ref("Trends Genet", true)];
        let csv = export_csv(&refs);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "Author A,2020,Some title,Trends Genet,\"Author A. Some title. Trends Genet 1, 1 (2020).\""
        );
    }

    #[test]
    fn missing_fields_render_empty() {
        let refs = vec![ParsedReference {
            raw: "Unparseable line".to_string(),
            authors: None,
            title: None,
            journal: Some("Trends Genet".to_string()),
            year: None,
            is_review: true,
        }];
        let csv = export_csv(&refs);
        assert_eq!(csv.lines().nth(1).unwrap(), ",,,Trends Genet,Unparseable line");
    }

    #[test]
    fn writes_file_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let refs = vec![make_ref("Trends Genet", true), make_ref("Cell", false)];

        let stats = write_review_report(&path, &refs).unwrap();
        assert_eq!(stats, ReportStats { total: 2, reviews: 1 });

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
