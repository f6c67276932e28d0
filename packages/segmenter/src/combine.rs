//! Merging segmented documents into one table.
//!
//! The combined table tags every row with the document it came from, puts
//! the fill sentinel into empty hierarchy number columns and numbers the
//! rows densely from zero in final order.

use crate::config::FILL_SENTINEL;
use crate::types::{Document, Record};

/// One row of the combined table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedRow {
    /// The record, with empty number columns filled.
    pub record: Record,

    /// Identifier of the source document.
    pub law_name: String,

    /// Zero-based position in the combined table.
    pub global_index: usize,
}

/// Combine documents into one table, preserving document and record order.
///
/// # Examples
/// ```
/// use regelrecht_segmenter::combine::combine_documents;
/// use regelrecht_segmenter::segmenter::segment_document;
///
/// let gg = segment_document("gg", ["Article 1", "[Dignity]", "(1) Inviolable."]);
/// let rows = combine_documents(&[gg]);
///
/// assert_eq!(rows[0].law_name, "gg");
/// assert_eq!(rows[0].record.chapter, "0");
/// assert_eq!(rows[0].record.section, "1");
/// assert_eq!(rows[0].global_index, 0);
/// ```
pub fn combine_documents(documents: &[Document]) -> Vec<CombinedRow> {
    documents
        .iter()
        .flat_map(|document| {
            document.records.iter().map(move |record| (document.id.as_str(), record))
        })
        .enumerate()
        .map(|(global_index, (law_name, record))| CombinedRow {
            record: fill_hierarchy_numbers(record.clone()),
            law_name: law_name.to_string(),
            global_index,
        })
        .collect()
}

/// Replace empty chapter/sub-chapter/section/subsection/point/subpoint values
/// with the fill sentinel. Titles and text are left untouched.
#[must_use]
pub fn fill_hierarchy_numbers(mut record: Record) -> Record {
    for field in [
        &mut record.chapter,
        &mut record.sub_chapter,
        &mut record.section,
        &mut record.subsection,
        &mut record.point,
        &mut record.subpoint,
    ] {
        if field.is_empty() {
            *field = FILL_SENTINEL.to_string();
        }
    }
    record
}
