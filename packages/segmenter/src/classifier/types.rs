//! Types for the line classifier.

use crate::types::Level;

/// Classification of a single trimmed, non-empty line.
///
/// Marker labels are stored in the form they take in the record table,
/// e.g. `(1)` for a subsection, `2.` for a point and `a)` for a subpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Table of contents, version statement or translator note.
    Boilerplate,

    /// `Chapter 3`. The title follows on the next line.
    Chapter { number: String },

    /// `II. The Federation and the States`. Title captured inline.
    RomanChapter { numeral: String, title: String },

    /// `Sub-Chapter 2`.
    SubChapter { number: String },

    /// `Section 3a`.
    Section { number: String },

    /// `Article 20a`. Stored in the section level.
    Article { number: String },

    /// Title for the level whose title is pending.
    Title { level: Level, title: String },

    /// `(2) trailing text`.
    Subsection { label: String, text: String },

    /// `1. trailing text`.
    Point { label: String, text: String },

    /// `a) trailing text`.
    Subpoint { label: String, text: String },

    /// Anything else.
    Body { text: String },
}

impl LineClass {
    /// Short name of the classification, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boilerplate => "boilerplate",
            Self::Chapter { .. } => "chapter",
            Self::RomanChapter { .. } => "roman_chapter",
            Self::SubChapter { .. } => "sub_chapter",
            Self::Section { .. } => "section",
            Self::Article { .. } => "article",
            Self::Title { .. } => "title",
            Self::Subsection { .. } => "subsection",
            Self::Point { .. } => "point",
            Self::Subpoint { .. } => "subpoint",
            Self::Body { .. } => "body",
        }
    }
}
