//! Ordered rule list for classifying lines.

use super::rule::LineRule;
use super::types::LineClass;
use crate::types::TitleExpectation;

/// Classifier holding rules in precedence order.
///
/// Rules are evaluated in registration order and the first match wins.
/// A line no rule claims is [`LineClass::Body`].
pub struct LineClassifier {
    rules: Vec<Box<dyn LineRule>>,
}

impl LineClassifier {
    /// Create a classifier without rules. Every line is body text.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule with lower precedence than all rules registered so far.
    pub fn register(&mut self, rule: impl LineRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Classify one trimmed, non-empty line.
    pub fn classify(&self, line: &str, pending: TitleExpectation) -> LineClass {
        self.rules
            .iter()
            .find_map(|rule| rule.classify(line, pending))
            .unwrap_or_else(|| LineClass::Body {
                text: line.to_string(),
            })
    }

    /// Rule names in precedence order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(&'static str, LineClass);

    impl LineRule for Always {
        fn name(&self) -> &'static str {
            self.0
        }

        fn classify(&self, _line: &str, _pending: TitleExpectation) -> Option<LineClass> {
            Some(self.1.clone())
        }
    }

    #[test]
    fn test_empty_classifier_yields_body() {
        let classifier = LineClassifier::new();
        assert!(classifier.is_empty());
        assert_eq!(
            classifier.classify("anything", TitleExpectation::None),
            LineClass::Body {
                text: "anything".to_string()
            }
        );
    }

    #[test]
    fn test_first_registered_rule_wins() {
        let mut classifier = LineClassifier::new();
        classifier.register(Always("first", LineClass::Boilerplate));
        classifier.register(Always(
            "second",
            LineClass::Chapter {
                number: "1".to_string(),
            },
        ));

        assert_eq!(classifier.len(), 2);
        assert_eq!(classifier.rule_names(), vec!["first", "second"]);
        assert_eq!(
            classifier.classify("Chapter 1", TitleExpectation::None),
            LineClass::Boilerplate
        );
    }
}
