use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;

use refsieve_parsing::ParsedReference;
use refsieve_reporting::ReportStats;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print each parsed entry with its review flag.
pub fn print_entries(
    w: &mut dyn Write,
    references: &[ParsedReference],
    color: ColorMode,
) -> std::io::Result<()> {
    for (i, r) in references.iter().enumerate() {
        if color.enabled() {
            writeln!(w, "{}", format!("[{}]", i + 1).bold().yellow())?;
        } else {
            writeln!(w, "[{}]", i + 1)?;
        }

        writeln!(w, "  Authors: {}", r.authors.as_deref().unwrap_or("(none)"))?;
        writeln!(w, "  Title:   {}", r.title.as_deref().unwrap_or("(none)"))?;
        writeln!(w, "  Journal: {}", r.journal.as_deref().unwrap_or("(none)"))?;
        writeln!(w, "  Year:    {}", r.year.as_deref().unwrap_or("(none)"))?;

        if r.is_review {
            if color.enabled() {
                writeln!(w, "  {}", "REVIEW".green())?;
            } else {
                writeln!(w, "  REVIEW")?;
            }
        }

        // Truncate long raw citations for display
        let raw_display = match r.raw.char_indices().nth(200) {
            Some((idx, _)) => format!("{}...", &r.raw[..idx]),
            None => r.raw.clone(),
        };
        if color.enabled() {
            writeln!(w, "  Raw:     {}", raw_display.dimmed())?;
        } else {
            writeln!(w, "  Raw:     {}", raw_display)?;
        }

        writeln!(w)?;
    }
    Ok(())
}

/// Print the run summary with counts and the output location.
pub fn print_summary(
    w: &mut dyn Write,
    stats: &ReportStats,
    output: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "Found {} review-like references out of {} total.",
            stats.reviews.green(),
            stats.total
        )?;
        writeln!(w, "Output: {}", output.display().dimmed())?;
    } else {
        writeln!(
            w,
            "Found {} review-like references out of {} total.",
            stats.reviews, stats.total
        )?;
        writeln!(w, "Output: {}", output.display())?;
    }
    Ok(())
}
