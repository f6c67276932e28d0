//! Segmentation of statute lines into hierarchy-tagged records.
//!
//! The segmenter walks a document line by line, keeps track of the current
//! position in the chapter → sub-chapter → section → subsection → point →
//! subpoint hierarchy, and emits a [`Record`](crate::types::Record) each
//! time a unit's text is complete.

mod buffer;
mod engine;

pub use buffer::PendingBuffer;
pub use engine::{segment_document, segment_lines, Segmenter};
