//! Segmenter that drives the hierarchy state machine from line classifications.

use super::buffer::PendingBuffer;
use crate::classifier::{create_statute_classifier, LineClass, LineClassifier};
use crate::types::{Document, HierarchyContext, Level, Record, TitleExpectation};

/// Warning recorded when one document uses both heading dialects.
const MIXED_DIALECT_WARNING: &str =
    "Document contains both Section and Article markers; both are stored in the Section column";

/// Heading dialects seen in the current document.
#[derive(Debug, Clone, Copy, Default)]
struct DialectTracker {
    section: bool,
    article: bool,
    reported: bool,
}

impl DialectTracker {
    /// Note a heading and return `true` the first time both dialects have been seen.
    fn observe(&mut self, class: &LineClass) -> bool {
        match class {
            LineClass::Section { .. } => self.section = true,
            LineClass::Article { .. } => self.article = true,
            _ => return false,
        }
        if self.section && self.article && !self.reported {
            self.reported = true;
            return true;
        }
        false
    }
}

/// Stateful segmenter for a single document.
///
/// Feed lines with [`Segmenter::push_line`] and call
/// [`Segmenter::finish`] after the last line. Records come out in
/// document order as soon as they are complete, so the segmenter can be
/// used for streaming as well as batch conversion.
pub struct Segmenter {
    classifier: LineClassifier,
    context: HierarchyContext,
    pending_title: TitleExpectation,
    buffer: PendingBuffer,
    dialects: DialectTracker,
    warnings: Vec<String>,
}

impl Segmenter {
    /// Create a segmenter using the statute classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(create_statute_classifier())
    }

    /// Create a segmenter using a custom classifier.
    #[must_use]
    pub fn with_classifier(classifier: LineClassifier) -> Self {
        Self {
            classifier,
            context: HierarchyContext::new(),
            pending_title: TitleExpectation::None,
            buffer: PendingBuffer::new(),
            dialects: DialectTracker::default(),
            warnings: Vec::new(),
        }
    }

    /// Current hierarchy position.
    #[must_use]
    pub fn context(&self) -> &HierarchyContext {
        &self.context
    }

    /// Title currently awaited, if any.
    #[must_use]
    pub fn pending_title(&self) -> TitleExpectation {
        self.pending_title
    }

    /// Process one raw line.
    ///
    /// The line is trimmed; blank lines are skipped. Returns the record of
    /// the previous unit when this line starts a new one and that unit had
    /// text.
    pub fn push_line(&mut self, line: &str) -> Option<Record> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let class = self.classifier.classify(line, self.pending_title);
        tracing::trace!(class = class.name(), line = %line, "Classified line");

        if self.dialects.observe(&class) {
            tracing::warn!("{MIXED_DIALECT_WARNING}");
            self.warnings.push(MIXED_DIALECT_WARNING.to_string());
        }

        self.apply(class)
    }

    /// Flush whatever text is still pending. Call once after the last line.
    pub fn finish(&mut self) -> Option<Record> {
        self.flush()
    }

    /// Consume the segmenter and return its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    fn apply(&mut self, class: LineClass) -> Option<Record> {
        match class {
            LineClass::Boilerplate => None,
            LineClass::Chapter { number } => self.start_unit(Level::Chapter, number),
            LineClass::RomanChapter { numeral, title } => {
                let record = self.start_unit(Level::Chapter, numeral);
                self.context.set_title(Level::Chapter, title);
                self.pending_title = TitleExpectation::None;
                record
            }
            LineClass::SubChapter { number } => self.start_unit(Level::SubChapter, number),
            LineClass::Section { number } | LineClass::Article { number } => {
                self.start_unit(Level::Section, number)
            }
            LineClass::Title { level, title } => {
                self.context.set_title(level, title);
                self.pending_title = TitleExpectation::None;
                None
            }
            LineClass::Subsection { label, text } => {
                self.start_unit_with_text(Level::Subsection, label, text)
            }
            LineClass::Point { label, text } => self.start_unit_with_text(Level::Point, label, text),
            LineClass::Subpoint { label, text } => {
                self.start_unit_with_text(Level::Subpoint, label, text)
            }
            LineClass::Body { text } => {
                self.buffer.push(text);
                None
            }
        }
    }

    /// Flush the previous unit, then enter `level`.
    ///
    /// Heading levels start awaiting their title; a title still pending
    /// from an earlier heading is dropped.
    fn start_unit(&mut self, level: Level, number: String) -> Option<Record> {
        let record = self.flush();
        self.context.enter(level, number);
        if level.has_title() {
            self.pending_title = TitleExpectation::for_level(level);
        }
        record
    }

    fn start_unit_with_text(&mut self, level: Level, label: String, text: String) -> Option<Record> {
        let record = self.start_unit(level, label);
        self.buffer.push(text);
        record
    }

    /// Turn the pending buffer into a record using the current context.
    fn flush(&mut self) -> Option<Record> {
        let text = self.buffer.take()?;
        let record = Record::new(&self.context, text);
        tracing::debug!(
            chapter = %record.chapter,
            section = %record.section,
            subsection = %record.subsection,
            point = %record.point,
            subpoint = %record.subpoint,
            "Flushed record"
        );
        Some(record)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment a sequence of lines into records.
///
/// # Examples
/// ```
/// use regelrecht_segmenter::segmenter::segment_lines;
///
/// let records = segment_lines(["Chapter 1", "General Provisions", "(1) Everyone has rights."]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].chapter_title, "General Provisions");
/// assert_eq!(records[0].subsection, "(1)");
/// ```
pub fn segment_lines<I, S>(lines: I) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segment_document("", lines).records
}

/// Segment a sequence of lines into a [`Document`] named `id`.
pub fn segment_document<I, S>(id: impl Into<String>, lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = Document::new(id);
    let mut segmenter = Segmenter::new();

    for line in lines {
        if let Some(record) = segmenter.push_line(line.as_ref()) {
            document.records.push(record);
        }
    }
    if let Some(record) = segmenter.finish() {
        document.records.push(record);
    }

    document.warnings = segmenter.into_warnings();
    document
}
