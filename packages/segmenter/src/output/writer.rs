//! File output for segmented documents.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::csv::{generate_combined_csv, generate_csv};
use super::yaml::generate_yaml;
use crate::combine::CombinedRow;
use crate::error::Result;
use crate::types::Document;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Ten-column table with a header row.
    #[default]
    Csv,
    /// YAML document with one mapping per record.
    Yaml,
}

impl OutputFormat {
    /// File extension for this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Yaml => "yaml",
        }
    }

    /// Render a document in this format.
    pub fn render(self, document: &Document) -> Result<String> {
        match self {
            Self::Csv => Ok(generate_csv(&document.records)),
            Self::Yaml => generate_yaml(document),
        }
    }
}

/// Default output path: the input path with the format's extension.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
/// use regelrecht_segmenter::output::{default_output_path, OutputFormat};
///
/// assert_eq!(
///     default_output_path(Path::new("laws/gg.txt"), OutputFormat::Csv),
///     PathBuf::from("laws/gg.csv")
/// );
/// ```
#[must_use]
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Write `content` to `path` atomically.
///
/// Writes to a hidden temp file next to the target, syncs it to disk, then
/// renames it over the target so a crash never leaves a partial file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}

/// Save a document in `format` to `output`.
///
/// Returns the path written.
pub fn save_document(document: &Document, format: OutputFormat, output: &Path) -> Result<PathBuf> {
    let content = format.render(document)?;
    write_atomic(output, &content)?;
    tracing::info!(
        document = %document.id,
        records = document.len(),
        path = %output.display(),
        "Saved document"
    );
    Ok(output.to_path_buf())
}

/// Save combined rows as CSV to `output`.
pub fn save_combined(rows: &[CombinedRow], output: &Path) -> Result<PathBuf> {
    write_atomic(output, &generate_combined_csv(rows))?;
    tracing::info!(rows = rows.len(), path = %output.display(), "Saved combined table");
    Ok(output.to_path_buf())
}
