use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

mod output;

use output::ColorMode;

/// Review Reference Extractor - flag review-journal citations in an article text export
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the exported article text
    #[arg(default_value = "data/article.md")]
    input: PathBuf,

    /// Path for the review-reference CSV
    #[arg(default_value = "review_references.csv")]
    output: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print every parsed entry before the summary
    #[arg(long)]
    print_entries: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Could not locate References section.")]
    NoReferencesSection,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Report(#[from] refsieve_reporting::ReportError),
}

impl CliError {
    /// Section-not-found is distinguishable from every other failure.
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::NoReferencesSection => ExitCode::from(2),
            _ => ExitCode::from(1),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let color = ColorMode(!cli.no_color);

    if !cli.input.exists() {
        return Err(CliError::InputNotFound(cli.input));
    }
    let text = std::fs::read_to_string(&cli.input)?;

    let references = refsieve_parsing::extract_references(&text)
        .map_err(|_| CliError::NoReferencesSection)?;

    let mut stdout = std::io::stdout().lock();

    if cli.print_entries {
        output::print_entries(&mut stdout, &references, color)?;
    }

    let stats = refsieve_reporting::write_review_report(&cli.output, &references)?;
    output::print_summary(&mut stdout, &stats, &cli.output, color)?;

    Ok(())
}
