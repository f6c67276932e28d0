//! Rules for numbered units inside a section: subsections, points, subpoints.
//!
//! Each marker may carry trailing text on the same line, which becomes the
//! first fragment of the new unit's body.

use regex::Regex;
use std::sync::LazyLock;

use crate::classifier::rule::LineRule;
use crate::classifier::types::LineClass;
use crate::types::TitleExpectation;

/// Parenthesized number with optional trailing text, e.g. "(2) Text".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBSECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((\d+)\)\s*(.*)").expect("valid regex"));

/// Number, period, whitespace, text, e.g. "3. Text".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static POINT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)").expect("valid regex"));

/// Lowercase letter, closing parenthesis, whitespace, text, e.g. "b) Text".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBPOINT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z])\)\s+(.*)").expect("valid regex"));

/// Match `pattern` and return `(marker, trailing text)`.
fn split_marker<'a>(pattern: &Regex, line: &'a str) -> Option<(&'a str, &'a str)> {
    let caps = pattern.captures(line)?;
    let marker = caps.get(1)?.as_str();
    let text = caps.get(2).map_or("", |m| m.as_str());
    Some((marker, text))
}

/// Rule for `(n) text`. Stored as `(n)`.
pub struct SubsectionRule;

impl LineRule for SubsectionRule {
    fn name(&self) -> &'static str {
        "subsection"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        split_marker(&SUBSECTION_PATTERN, line).map(|(number, text)| LineClass::Subsection {
            label: format!("({number})"),
            text: text.to_string(),
        })
    }
}

/// Rule for `n. text`. Stored as `n.`.
pub struct PointRule;

impl LineRule for PointRule {
    fn name(&self) -> &'static str {
        "point"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        split_marker(&POINT_PATTERN, line).map(|(number, text)| LineClass::Point {
            label: format!("{number}."),
            text: text.to_string(),
        })
    }
}

/// Rule for `x) text`. Stored as `x)`.
pub struct SubpointRule;

impl LineRule for SubpointRule {
    fn name(&self) -> &'static str {
        "subpoint"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        split_marker(&SUBPOINT_PATTERN, line).map(|(letter, text)| LineClass::Subpoint {
            label: format!("{letter})"),
            text: text.to_string(),
        })
    }
}
