mod export;

pub use export::{ReportError, ReportStats, export_csv, write_review_report};
