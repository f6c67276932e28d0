//! RegelRecht Segmenter - Split plain-text statutes into hierarchy-tagged records.
//!
//! This crate converts the text of statute-like documents, one line at a
//! time, into a flat table of records. Each record carries its position in
//! the chapter → sub-chapter → section → subsection → point → subpoint
//! hierarchy and the text belonging to that position.
//!
//! # Example
//!
//! ```
//! use regelrecht_segmenter::segment_lines;
//!
//! let records = segment_lines([
//!     "I. Basic Rights",
//!     "Article 1",
//!     "[Human dignity]",
//!     "(1) Human dignity shall be inviolable.",
//! ]);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].chapter, "I");
//! assert_eq!(records[0].section, "1");
//! assert_eq!(records[0].section_title, "Human dignity");
//! assert_eq!(records[0].subsection, "(1)");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Column names, boilerplate prefixes, file naming
//! - [`types`]: Hierarchy context, records, documents
//! - [`error`]: Error types and Result alias
//! - [`classifier`]: Ordered line rules deciding what each line is
//! - [`segmenter`]: Hierarchy state machine and text buffering
//! - [`loader`]: Reading and decoding source documents
//! - [`converter`]: Single-document and batch conversion
//! - [`combine`]: Merging documents into one indexed table
//! - [`output`]: CSV and YAML generation
//! - [`cli`]: Command-line interface

pub mod classifier;
pub mod cli;
pub mod combine;
pub mod config;
pub mod converter;
pub mod error;
pub mod loader;
pub mod output;
pub mod segmenter;
pub mod types;

// Re-export main functions
pub use converter::{convert_directory, convert_file};
pub use segmenter::{segment_document, segment_lines, Segmenter};

// Re-export commonly used items
pub use error::{Result, SegmenterError};
pub use types::{Document, HierarchyContext, Level, Record, TitleExpectation};
