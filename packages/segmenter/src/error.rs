//! Error types for the segmenter.
//!
//! Line classification is total, so every variant here belongs to the
//! document-acquisition or output boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the segmenter library.
#[derive(Debug, Error)]
pub enum SegmenterError {
    /// Source document could not be read.
    #[error("Document unreadable: {}: {source}", .path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source document is not valid UTF-8 text.
    #[error("Document unreadable: {} is not valid UTF-8 text", .path.display())]
    InvalidEncoding { path: PathBuf },

    /// Source path has no file name to derive a document identifier from.
    #[error("Document unreadable: {} has no file name", .path.display())]
    UnnamedDocument { path: PathBuf },

    /// Two documents of one batch map to the same output file.
    #[error("Output {} was already written by another document in this batch", .path.display())]
    DuplicateOutput { path: PathBuf },

    /// Input directory missing or not a directory.
    #[error("Invalid input directory: {0}")]
    InvalidInputDirectory(String),

    /// Batch input contained no documents.
    #[error("No .{extension} documents found in {dir}")]
    EmptyBatch { dir: String, extension: String },

    /// Some documents of a batch could not be converted.
    #[error("{failed} of {total} documents could not be converted")]
    BatchFailed { failed: usize, total: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl SegmenterError {
    /// Whether this error means the source document itself could not be used.
    #[must_use]
    pub fn is_unreadable_document(&self) -> bool {
        matches!(
            self,
            Self::DocumentUnreadable { .. }
                | Self::InvalidEncoding { .. }
                | Self::UnnamedDocument { .. }
        )
    }
}

/// Result type alias for segmenter operations.
pub type Result<T> = std::result::Result<T, SegmenterError>;
