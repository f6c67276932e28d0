//! Classifier configuration for plain-text statutes.

use super::core::LineClassifier;
use super::rules::{
    ArticleRule, BoilerplateRule, ChapterRule, PointRule, RomanChapterRule, SectionRule,
    SubChapterRule, SubpointRule, SubsectionRule, TitleRule,
};

/// Create a classifier with the statute rules in precedence order.
///
/// Order matters where patterns overlap: headings are tried before the
/// pending title, and the pending title before numbered units, so that
/// `Article 2` after `Article 1` is a new article but `(1) Text` directly
/// after `Article 1` is its title.
///
/// ```text
/// boilerplate
/// chapter         Chapter 1
/// roman_chapter   I. Basic Rights
/// sub_chapter     Sub-Chapter 1
/// section         Section 3a
/// article         Article 1
/// title           (only while a title is pending)
/// subsection      (1) ...
/// point           1. ...
/// subpoint        a) ...
/// ```
#[must_use]
pub fn create_statute_classifier() -> LineClassifier {
    let mut classifier = LineClassifier::new();

    classifier.register(BoilerplateRule);

    // Headings
    classifier.register(ChapterRule);
    classifier.register(RomanChapterRule);
    classifier.register(SubChapterRule);
    classifier.register(SectionRule);
    classifier.register(ArticleRule);

    classifier.register(TitleRule);

    // Numbered units
    classifier.register(SubsectionRule);
    classifier.register(PointRule);
    classifier.register(SubpointRule);

    classifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LineClass;
    use crate::types::{Level, TitleExpectation};

    #[test]
    fn test_rule_order() {
        let classifier = create_statute_classifier();
        assert_eq!(
            classifier.rule_names(),
            vec![
                "boilerplate",
                "chapter",
                "roman_chapter",
                "sub_chapter",
                "section",
                "article",
                "title",
                "subsection",
                "point",
                "subpoint",
            ]
        );
    }

    #[test]
    fn test_boilerplate_beats_headings() {
        let classifier = create_statute_classifier();
        assert_eq!(
            classifier.classify("Chapter 1 - Table of Contents", TitleExpectation::None),
            LineClass::Boilerplate
        );
    }

    #[test]
    fn test_heading_beats_pending_title() {
        let classifier = create_statute_classifier();
        assert_eq!(
            classifier.classify("Section 4", TitleExpectation::Section),
            LineClass::Section {
                number: "4".to_string()
            }
        );
    }

    #[test]
    fn test_pending_title_beats_numbered_units() {
        let classifier = create_statute_classifier();
        assert_eq!(
            classifier.classify("1. Principles", TitleExpectation::Chapter),
            LineClass::Title {
                level: Level::Chapter,
                title: "1. Principles".to_string(),
            }
        );
    }

    #[test]
    fn test_point_is_not_roman_chapter() {
        let classifier = create_statute_classifier();
        assert_eq!(
            classifier.classify("1. Something", TitleExpectation::None),
            LineClass::Point {
                label: "1.".to_string(),
                text: "Something".to_string(),
            }
        );
        assert_eq!(
            classifier.classify("I. Something", TitleExpectation::None),
            LineClass::RomanChapter {
                numeral: "I".to_string(),
                title: "Something".to_string(),
            }
        );
    }

    #[test]
    fn test_body_fallback() {
        let classifier = create_statute_classifier();
        assert_eq!(
            classifier.classify("shall be inviolable.", TitleExpectation::None),
            LineClass::Body {
                text: "shall be inviolable.".to_string()
            }
        );
    }
}
