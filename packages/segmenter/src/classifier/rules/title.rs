//! Rule consuming a pending heading title.

use crate::classifier::rule::LineRule;
use crate::classifier::types::LineClass;
use crate::types::{Level, TitleExpectation};

/// Claims the whole line as the title of the level whose title is pending.
///
/// Selected by state rather than line content. Basic Law article titles
/// come in square brackets (`[Human dignity]`); those are stripped for the
/// section level.
pub struct TitleRule;

impl LineRule for TitleRule {
    fn name(&self) -> &'static str {
        "title"
    }

    fn classify(&self, line: &str, pending: TitleExpectation) -> Option<LineClass> {
        let level = pending.level()?;
        let title = match level {
            Level::Section => strip_brackets(line),
            _ => line,
        };
        Some(LineClass::Title {
            level,
            title: title.to_string(),
        })
    }
}

/// Strip one pair of square brackets wrapping the entire line.
///
/// Lines with further brackets inside, such as `[a] and [b]`, are kept as-is.
fn strip_brackets(line: &str) -> &str {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|inner| !inner.contains(['[', ']']))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_title_pending() {
        assert_eq!(TitleRule.classify("Anything", TitleExpectation::None), None);
    }

    #[test]
    fn test_chapter_title_kept_verbatim() {
        assert_eq!(
            TitleRule.classify("[General Provisions]", TitleExpectation::Chapter),
            Some(LineClass::Title {
                level: Level::Chapter,
                title: "[General Provisions]".to_string(),
            })
        );
    }

    #[test]
    fn test_sub_chapter_title() {
        assert_eq!(
            TitleRule.classify("Scope of application", TitleExpectation::SubChapter),
            Some(LineClass::Title {
                level: Level::SubChapter,
                title: "Scope of application".to_string(),
            })
        );
    }

    #[test]
    fn test_section_title_brackets_stripped() {
        assert_eq!(
            TitleRule.classify("[Human dignity]", TitleExpectation::Section),
            Some(LineClass::Title {
                level: Level::Section,
                title: "Human dignity".to_string(),
            })
        );
    }

    #[test]
    fn test_section_title_without_brackets() {
        assert_eq!(
            TitleRule.classify("Murder", TitleExpectation::Section),
            Some(LineClass::Title {
                level: Level::Section,
                title: "Murder".to_string(),
            })
        );
    }

    #[test]
    fn test_strip_brackets() {
        assert_eq!(strip_brackets("[Equality]"), "Equality");
        assert_eq!(strip_brackets("[]"), "");
        assert_eq!(strip_brackets("[a] and [b]"), "[a] and [b]");
        assert_eq!(strip_brackets("[unterminated"), "[unterminated");
        assert_eq!(strip_brackets("["), "[");
    }

    #[test]
    fn test_title_rule_claims_marker_like_lines() {
        // A pending title takes the next line even if it looks like a point.
        assert_eq!(
            TitleRule.classify("(1) Everyone", TitleExpectation::Section),
            Some(LineClass::Title {
                level: Level::Section,
                title: "(1) Everyone".to_string(),
            })
        );
    }
}
