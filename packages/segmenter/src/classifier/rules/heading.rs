//! Rules for heading markers: chapters, sub-chapters, sections, articles.
//!
//! Two dialects are recognized. Translated codes use `Chapter 1` /
//! `Sub-Chapter 1` / `Section 1`, the Basic Law uses `I. Title` /
//! `Article 1`. Articles land in the section level.

use regex::Regex;
use std::sync::LazyLock;

use crate::classifier::rule::LineRule;
use crate::classifier::types::LineClass;
use crate::types::TitleExpectation;

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHAPTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Chapter\s+(\d+)").expect("valid regex"));

/// Roman numeral chapter with inline title, e.g. "IV. The Bundesrat".
/// Digits are outside the numeral set, so points like "1. Text" never match.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ROMAN_CHAPTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([IVXLCDM]+)\.\s+(.*)").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUB_CHAPTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sub-Chapter\s+(\d+)").expect("valid regex"));

/// Section number with optional letter suffix, e.g. "3a".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Section\s+(\d+[a-z]?)").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Article\s+(\d+[a-z]?)").expect("valid regex"));

/// Return capture group `index` of `pattern` on `line`.
fn capture<'a>(pattern: &Regex, line: &'a str, index: usize) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(index))
        .map(|m| m.as_str())
}

/// Rule for `Chapter <digits>`.
pub struct ChapterRule;

impl LineRule for ChapterRule {
    fn name(&self) -> &'static str {
        "chapter"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        capture(&CHAPTER_PATTERN, line, 1).map(|number| LineClass::Chapter {
            number: number.to_string(),
        })
    }
}

/// Rule for `<Roman numeral>. <title>`.
pub struct RomanChapterRule;

impl LineRule for RomanChapterRule {
    fn name(&self) -> &'static str {
        "roman_chapter"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        let caps = ROMAN_CHAPTER_PATTERN.captures(line)?;
        let numeral = caps.get(1)?.as_str();
        let title = caps.get(2).map_or("", |m| m.as_str());
        Some(LineClass::RomanChapter {
            numeral: numeral.to_string(),
            title: title.to_string(),
        })
    }
}

/// Rule for `Sub-Chapter <digits>`.
pub struct SubChapterRule;

impl LineRule for SubChapterRule {
    fn name(&self) -> &'static str {
        "sub_chapter"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        capture(&SUB_CHAPTER_PATTERN, line, 1).map(|number| LineClass::SubChapter {
            number: number.to_string(),
        })
    }
}

/// Rule for `Section <digits>[letter]`.
pub struct SectionRule;

impl LineRule for SectionRule {
    fn name(&self) -> &'static str {
        "section"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        capture(&SECTION_PATTERN, line, 1).map(|number| LineClass::Section {
            number: number.to_string(),
        })
    }
}

/// Rule for `Article <digits>[letter]`.
pub struct ArticleRule;

impl LineRule for ArticleRule {
    fn name(&self) -> &'static str {
        "article"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        capture(&ARTICLE_PATTERN, line, 1).map(|number| LineClass::Article {
            number: number.to_string(),
        })
    }
}
