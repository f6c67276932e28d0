//! Configuration constants and helper functions for the segmenter.

use std::path::Path;

/// Column order of the record table. The header row always uses these names.
pub const COLUMNS: [&str; 10] = [
    "Chapter",
    "ChapterTitle",
    "SubChapter",
    "SubChapterTitle",
    "Section",
    "SectionTitle",
    "Subsection",
    "Point",
    "Subpoint",
    "Text",
];

/// Columns appended by the combiner, after [`COLUMNS`].
pub const COMBINED_COLUMNS: [&str; 2] = ["law_name", "global_index"];

/// Value written into empty hierarchy number columns of the combined table.
pub const FILL_SENTINEL: &str = "0";

/// File extension of source documents picked up by batch conversion.
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Default file name of the combined table inside the input directory.
pub const COMBINED_FILE_NAME: &str = "combined_laws.csv";

/// Case-insensitive marker for table-of-contents lines.
pub const TABLE_OF_CONTENTS_MARKER: &str = "table of contents";

/// Line prefixes of header and version metadata in translated statutes.
///
/// Covers the version statement and the translator attribution in both the
/// German and the English form.
pub const BOILERPLATE_PREFIXES: [&str; 4] = [
    "Stand: Die Übersetzung",
    "Version information:",
    "Übersetzung durch",
    "Translated by",
];

/// Byte order mark stripped from the start of a document.
pub const UTF8_BOM: char = '\u{feff}';

/// Check whether a path looks like a source document for batch conversion.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use regelrecht_segmenter::config::is_document_path;
///
/// assert!(is_document_path(Path::new("rag_resource/gg.txt")));
/// assert!(is_document_path(Path::new("BGB.TXT")));
/// assert!(!is_document_path(Path::new("combined_laws.csv")));
/// ```
pub fn is_document_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
}

/// Derive the document identifier from its source name.
///
/// The identifier is the file stem exactly as written, so two distinct
/// file names never share an identifier. Non-UTF-8 bytes are replaced.
/// Returns `None` when the path has no file stem.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use regelrecht_segmenter::config::document_id_from_path;
///
/// assert_eq!(
///     document_id_from_path(Path::new("rag_resource/basic_law.txt")),
///     Some("basic_law".to_string())
/// );
/// ```
pub fn document_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}
