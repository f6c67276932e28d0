//! Core data types for the segmenter.
//!
//! These types represent a statute's position in the legal hierarchy and
//! the records produced for each unit of text.

use serde::Serialize;

/// A level of the legal hierarchy, ordered broadest to narrowest.
///
/// Articles share the [`Level::Section`] level with sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Chapter,
    SubChapter,
    Section,
    Subsection,
    Point,
    Subpoint,
}

impl Level {
    /// All levels from broadest to narrowest.
    pub const ALL: [Level; 6] = [
        Level::Chapter,
        Level::SubChapter,
        Level::Section,
        Level::Subsection,
        Level::Point,
        Level::Subpoint,
    ];

    /// Whether this level carries a human-readable title.
    #[must_use]
    pub fn has_title(self) -> bool {
        matches!(self, Self::Chapter | Self::SubChapter | Self::Section)
    }
}

/// Which level's title, if any, the next line is expected to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleExpectation {
    #[default]
    None,
    Chapter,
    SubChapter,
    Section,
}

impl TitleExpectation {
    /// Expectation for the title of the given level.
    ///
    /// Levels without titles map to [`TitleExpectation::None`].
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Chapter => Self::Chapter,
            Level::SubChapter => Self::SubChapter,
            Level::Section => Self::Section,
            Level::Subsection | Level::Point | Level::Subpoint => Self::None,
        }
    }

    /// The level whose title is pending.
    #[must_use]
    pub fn level(self) -> Option<Level> {
        match self {
            Self::None => None,
            Self::Chapter => Some(Level::Chapter),
            Self::SubChapter => Some(Level::SubChapter),
            Self::Section => Some(Level::Section),
        }
    }
}

/// The current position in the legal hierarchy.
///
/// One instance lives for the whole scan of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyContext {
    pub chapter: String,
    pub chapter_title: String,
    pub sub_chapter: String,
    pub sub_chapter_title: String,
    pub section: String,
    pub section_title: String,
    pub subsection: String,
    pub point: String,
    pub subpoint: String,
}

impl HierarchyContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new unit at `level` numbered `number`.
    ///
    /// Clears the level's own title and every field strictly below it.
    pub fn enter(&mut self, level: Level, number: impl Into<String>) {
        self.descend(level);
        *self.number_mut(level) = number.into();
    }

    /// Reset `level` and every level below it, titles included.
    pub fn descend(&mut self, level: Level) {
        for lower in Level::ALL.into_iter().filter(|l| *l >= level) {
            self.number_mut(lower).clear();
            if let Some(title) = self.title_mut(lower) {
                title.clear();
            }
        }
    }

    /// Set the title of a title-bearing level. Other levels are ignored.
    pub fn set_title(&mut self, level: Level, title: impl Into<String>) {
        if let Some(field) = self.title_mut(level) {
            *field = title.into();
        }
    }

    fn number_mut(&mut self, level: Level) -> &mut String {
        match level {
            Level::Chapter => &mut self.chapter,
            Level::SubChapter => &mut self.sub_chapter,
            Level::Section => &mut self.section,
            Level::Subsection => &mut self.subsection,
            Level::Point => &mut self.point,
            Level::Subpoint => &mut self.subpoint,
        }
    }

    fn title_mut(&mut self, level: Level) -> Option<&mut String> {
        match level {
            Level::Chapter => Some(&mut self.chapter_title),
            Level::SubChapter => Some(&mut self.sub_chapter_title),
            Level::Section => Some(&mut self.section_title),
            Level::Subsection | Level::Point | Level::Subpoint => None,
        }
    }
}

/// One hierarchy-tagged text fragment.
///
/// A snapshot of the [`HierarchyContext`] at flush time plus the text
/// accumulated for that unit. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub chapter: String,
    pub chapter_title: String,
    pub sub_chapter: String,
    pub sub_chapter_title: String,
    pub section: String,
    pub section_title: String,
    pub subsection: String,
    pub point: String,
    pub subpoint: String,
    pub text: String,
}

impl Record {
    /// Snapshot a context together with the flushed text.
    #[must_use]
    pub fn new(context: &HierarchyContext, text: impl Into<String>) -> Self {
        Self {
            chapter: context.chapter.clone(),
            chapter_title: context.chapter_title.clone(),
            sub_chapter: context.sub_chapter.clone(),
            sub_chapter_title: context.sub_chapter_title.clone(),
            section: context.section.clone(),
            section_title: context.section_title.clone(),
            subsection: context.subsection.clone(),
            point: context.point.clone(),
            subpoint: context.subpoint.clone(),
            text: text.into(),
        }
    }

    /// Field values in table column order (see [`crate::config::COLUMNS`]).
    #[must_use]
    pub fn values(&self) -> [&str; 10] {
        [
            &self.chapter,
            &self.chapter_title,
            &self.sub_chapter,
            &self.sub_chapter_title,
            &self.section,
            &self.section_title,
            &self.subsection,
            &self.point,
            &self.subpoint,
            &self.text,
        ]
    }
}

/// A segmented source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier derived from the source name.
    pub id: String,

    /// Records in document order.
    pub records: Vec<Record>,

    /// Non-fatal notes collected while segmenting.
    pub warnings: Vec<String>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document produced no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
