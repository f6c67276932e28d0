//! Loading source documents from disk.
//!
//! A document is read completely and decoded as UTF-8 before segmentation
//! starts. This is the only place a conversion can fail.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{document_id_from_path, is_document_path, DOCUMENT_EXTENSION, UTF8_BOM};
use crate::error::{Result, SegmenterError};

/// A source document held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Identifier derived from the file name.
    pub id: String,

    /// Path the document was read from.
    pub path: PathBuf,

    /// Decoded document text.
    pub text: String,
}

impl SourceDocument {
    /// Create a document from text already in memory.
    #[must_use]
    pub fn from_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: PathBuf::new(),
            text: text.into(),
        }
    }

    /// Raw lines of the document, without line terminators.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. `\r\n` leaves an empty
    /// piece behind, which the segmenter skips like any blank line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(['\r', '\n'])
    }
}

/// Decode raw bytes as UTF-8 text, dropping a leading byte order mark.
///
/// # Arguments
/// * `bytes` - Raw file content
/// * `path` - Source path, used for the error
///
/// # Returns
/// * `Ok(String)` with the decoded text
/// * `Err(SegmenterError::InvalidEncoding)` if the bytes are not UTF-8
pub fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|_| SegmenterError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Read and decode a document from disk.
///
/// # Errors
/// Returns `DocumentUnreadable` if the file cannot be read,
/// `InvalidEncoding` if it is not UTF-8 and `UnnamedDocument` if the path
/// has no file stem.
pub fn load_document(path: &Path) -> Result<SourceDocument> {
    let bytes = fs::read(path).map_err(|source| SegmenterError::DocumentUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_text(bytes, path)?;

    let id = document_id_from_path(path).ok_or_else(|| SegmenterError::UnnamedDocument {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(document = %id, bytes = text.len(), "Loaded document");

    Ok(SourceDocument {
        id,
        path: path.to_path_buf(),
        text,
    })
}

/// List the source documents in a directory, sorted by file name.
///
/// Only regular files with the document extension are returned;
/// subdirectories are not searched.
///
/// # Errors
/// Returns `InvalidInputDirectory` if `dir` is missing or not a directory,
/// and `EmptyBatch` if it holds no documents.
pub fn find_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SegmenterError::InvalidInputDirectory(
            dir.display().to_string(),
        ));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_document_path(path))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(SegmenterError::EmptyBatch {
            dir: dir.display().to_string(),
            extension: DOCUMENT_EXTENSION.to_string(),
        });
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_decode_text_strips_bom() {
        let bytes = "\u{feff}Chapter 1".as_bytes().to_vec();
        assert_eq!(decode_text(bytes, Path::new("a.txt")).unwrap(), "Chapter 1");
    }

    #[test]
    fn test_decode_text_invalid_utf8() {
        let err = decode_text(vec![0x43, 0xff, 0xfe], Path::new("bad.txt")).unwrap_err();
        assert!(matches!(err, SegmenterError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_load_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("criminal_code.txt");
        fs::write(&path, "Section 1\r\nNo punishment without law\r\n").unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(document.id, "criminal_code");
        let lines: Vec<&str> = document.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Section 1", "No punishment without law"]);
    }

    #[test]
    fn test_load_document_keeps_stem_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a .txt");
        fs::write(&path, "(1) Text.").unwrap();

        assert_eq!(load_document(&path).unwrap().id, "a ");
    }

    #[test]
    fn test_load_document_missing() {
        let dir = tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, SegmenterError::DocumentUnreadable { .. }));
    }

    #[test]
    fn test_find_documents_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("urls.csv"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let paths = find_documents(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_find_documents_empty() {
        let dir = tempdir().unwrap();
        let err = find_documents(dir.path()).unwrap_err();
        assert!(matches!(err, SegmenterError::EmptyBatch { .. }));
    }

    #[test]
    fn test_find_documents_not_a_dir() {
        let err = find_documents(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, SegmenterError::InvalidInputDirectory(_)));
    }

    #[test]
    fn test_lines_split_on_lone_carriage_return() {
        let document = SourceDocument::from_text("mac", "Section 1\rTheft\r(1) Whoever steals.\r");
        let lines: Vec<&str> = document.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Section 1", "Theft", "(1) Whoever steals."]);
    }

    #[test]
    fn test_lines_mixed_terminators() {
        let document = SourceDocument::from_text("mixed", "a\r\nb\rc\nd");
        let lines: Vec<&str> = document.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_from_text() {
        let document = SourceDocument::from_text("inline", "a\nb");
        assert_eq!(document.lines().count(), 2);
        assert_eq!(document.path, PathBuf::new());
    }
}
