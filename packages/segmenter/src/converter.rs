//! Conversion service that ties loading and segmentation together.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::{find_documents, load_document, SourceDocument};
use crate::segmenter::segment_document;
use crate::types::Document;

/// Outcome of converting one document in a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Source path of the document.
    pub path: PathBuf,

    /// The segmented document, or why it could not be read.
    pub result: Result<Document>,
}

impl BatchOutcome {
    /// Whether the document was converted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Segment a document already held in memory.
#[must_use]
pub fn convert_source(source: &SourceDocument) -> Document {
    let document = segment_document(source.id.clone(), source.lines());
    tracing::info!(
        document = %document.id,
        records = document.len(),
        warnings = document.warnings.len(),
        "Segmented document"
    );
    document
}

/// Load and segment one document.
///
/// # Errors
/// Fails only when the document cannot be read or decoded; no partial
/// output is produced in that case.
pub fn convert_file(path: &Path) -> Result<Document> {
    let source = load_document(path)?;
    Ok(convert_source(&source))
}

/// Convert several documents, isolating failures per document.
///
/// `on_done` is called after each document, in input order.
pub fn convert_paths(
    paths: &[PathBuf],
    mut on_done: impl FnMut(&BatchOutcome),
) -> Vec<BatchOutcome> {
    paths
        .iter()
        .map(|path| {
            let result = convert_file(path);
            if let Err(e) = &result {
                tracing::warn!(path = %path.display(), error = %e, "Skipping document");
            }
            let outcome = BatchOutcome {
                path: path.clone(),
                result,
            };
            on_done(&outcome);
            outcome
        })
        .collect()
}

/// Convert every source document in a directory.
///
/// # Errors
/// Fails if the directory is missing or holds no documents. Individual
/// unreadable documents are reported in their [`BatchOutcome`].
pub fn convert_directory(dir: &Path) -> Result<Vec<BatchOutcome>> {
    let paths = find_documents(dir)?;
    Ok(convert_paths(&paths, |_| {}))
}
