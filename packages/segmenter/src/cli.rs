//! Command-line interface for the segmenter.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::combine::combine_documents;
use crate::config::COMBINED_FILE_NAME;
use crate::converter::{convert_file, convert_paths, BatchOutcome};
use crate::error::{Result, SegmenterError};
use crate::loader::find_documents;
use crate::output::{default_output_path, save_combined, save_document, OutputFormat};
use crate::types::Document;

/// RegelRecht Segmenter - Split plain-text statutes into hierarchy-tagged records.
#[derive(Parser)]
#[command(name = "regelrecht-segmenter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Segment one document.
    Convert {
        /// Source text file
        input: PathBuf,

        /// Output file (default: input path with the format's extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },

    /// Segment every .txt document in a directory.
    Batch {
        /// Directory containing source text files
        dir: PathBuf,

        /// Output directory (default: next to each source file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },

    /// Segment every .txt document in a directory into one combined table.
    Combine {
        /// Directory containing source text files
        dir: PathBuf,

        /// Output file (default: combined_laws.csv in the input directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => convert_command(&input, output.as_deref(), format),
        Commands::Batch {
            dir,
            output,
            format,
        } => batch_command(&dir, output.as_deref(), format),
        Commands::Combine { dir, output } => combine_command(&dir, output.as_deref()),
    }
}

/// Fail early if an output directory was given but cannot be used.
fn validate_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Err(SegmenterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )));
    }
    if !output_dir.is_dir() {
        return Err(SegmenterError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", output_dir.display()),
        )));
    }
    Ok(())
}

/// Progress bar for a batch of `len` documents.
fn batch_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("=> "),
    );
    pb
}

/// Print a per-document summary line.
fn print_summary(document: &Document) {
    println!(
        "  {}: {} records",
        style(&document.id).cyan(),
        document.len()
    );
    for warning in &document.warnings {
        println!("    {} {warning}", style("warning:").yellow().bold());
    }
}

/// Convert a batch of paths with a progress bar, then print the failures.
///
/// Failures are printed after the bar is cleared, since a hidden bar
/// (stdout not a terminal) swallows anything routed through it.
fn convert_with_progress(paths: &[PathBuf]) -> Vec<BatchOutcome> {
    let pb = batch_progress(paths.len());
    let outcomes = convert_paths(paths, |outcome| {
        pb.set_message(
            outcome
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        pb.inc(1);
    });
    pb.finish_and_clear();

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            print_failure(e);
        }
    }
    outcomes
}

fn print_failure(error: &SegmenterError) {
    println!("{} {error}", style("Failed:").red().bold());
}

/// Execute the convert command.
fn convert_command(input: &Path, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    println!(
        "{} {}",
        style("Segmenting").bold(),
        style(input.display()).cyan()
    );

    let document = convert_file(input)?;
    print_summary(&document);

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input, format));
    let saved = save_document(&document, format, &output_path)?;

    println!();
    println!("{} {}", style("Saved to:").green().bold(), saved.display());
    Ok(())
}

/// Execute the batch command.
fn batch_command(dir: &Path, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    if let Some(output_dir) = output {
        validate_output_dir(output_dir)?;
    }

    let paths = find_documents(dir)?;
    println!(
        "{} {} documents in {}",
        style("Segmenting").bold(),
        paths.len(),
        style(dir.display()).cyan()
    );
    println!();

    let outcomes = convert_with_progress(&paths);

    let total = outcomes.len();
    let mut failed = total - outcomes.iter().filter(|o| o.is_ok()).count();
    let mut written: HashSet<PathBuf> = HashSet::new();
    for outcome in outcomes {
        let Ok(document) = outcome.result else {
            continue;
        };
        let output_path = match output {
            Some(output_dir) => {
                output_dir.join(format!("{}.{}", document.id, format.extension()))
            }
            None => default_output_path(&outcome.path, format),
        };
        if !written.insert(output_path.clone()) {
            failed += 1;
            print_failure(&SegmenterError::DuplicateOutput { path: output_path });
            continue;
        }
        match save_document(&document, format, &output_path) {
            Ok(path) => {
                print_summary(&document);
                println!("    {} {}", style("->").green(), path.display());
            }
            Err(e) => {
                failed += 1;
                print_failure(&e);
            }
        }
    }

    println!();
    if failed > 0 {
        return Err(SegmenterError::BatchFailed { failed, total });
    }
    println!(
        "{} {total} documents",
        style("Converted").green().bold()
    );
    Ok(())
}

/// Execute the combine command.
fn combine_command(dir: &Path, output: Option<&Path>) -> Result<()> {
    let paths = find_documents(dir)?;
    println!(
        "{} {} documents in {}",
        style("Combining").bold(),
        paths.len(),
        style(dir.display()).cyan()
    );
    println!();

    let mut skipped = 0;
    let documents: Vec<Document> = convert_with_progress(&paths)
        .into_iter()
        .filter_map(|outcome| match outcome.result {
            Ok(document) => Some(document),
            Err(e) => {
                if e.is_unreadable_document() {
                    skipped += 1;
                }
                None
            }
        })
        .collect();
    for document in &documents {
        print_summary(document);
    }
    if skipped > 0 {
        println!(
            "{} {skipped} unreadable documents",
            style("Skipped").yellow().bold()
        );
    }

    let rows = combine_documents(&documents);
    if rows.is_empty() {
        println!("{}", style("No records to combine.").yellow());
        return Ok(());
    }

    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(COMBINED_FILE_NAME));
    let saved = save_combined(&rows, &output_path)?;

    println!();
    println!(
        "{} {} with {} rows",
        style("Saved to:").green().bold(),
        saved.display(),
        rows.len()
    );
    Ok(())
}
