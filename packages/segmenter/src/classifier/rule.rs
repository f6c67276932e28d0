//! Line rule trait definition.

use super::types::LineClass;
use crate::types::TitleExpectation;

/// Trait for line classification rules.
///
/// A rule inspects one trimmed, non-empty line and either claims it by
/// returning a classification or passes with `None`. Rules only see the
/// pending title expectation, never the rest of the segmenter state.
pub trait LineRule: Send + Sync {
    /// Name used in logs and for auditing rule order.
    fn name(&self) -> &'static str;

    /// Classify the line, or return `None` to let the next rule try.
    fn classify(&self, line: &str, pending: TitleExpectation) -> Option<LineClass>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShoutRule;

    impl LineRule for ShoutRule {
        fn name(&self) -> &'static str {
            "shout"
        }

        fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
            (line.to_uppercase() == line).then_some(LineClass::Boilerplate)
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = ShoutRule;
        assert_eq!(rule.name(), "shout");
        assert_eq!(
            rule.classify("LOUD", TitleExpectation::None),
            Some(LineClass::Boilerplate)
        );
        assert_eq!(rule.classify("quiet", TitleExpectation::None), None);
    }
}
