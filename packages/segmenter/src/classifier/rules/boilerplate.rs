//! Rule discarding boilerplate lines.

use crate::classifier::rule::LineRule;
use crate::classifier::types::LineClass;
use crate::config::{BOILERPLATE_PREFIXES, TABLE_OF_CONTENTS_MARKER};
use crate::types::TitleExpectation;

/// Claims table-of-contents lines and header/version metadata.
///
/// Boilerplate has no effect on the hierarchy or the pending buffer.
pub struct BoilerplateRule;

impl LineRule for BoilerplateRule {
    fn name(&self) -> &'static str {
        "boilerplate"
    }

    fn classify(&self, line: &str, _pending: TitleExpectation) -> Option<LineClass> {
        let is_toc = line.to_lowercase().contains(TABLE_OF_CONTENTS_MARKER);
        let is_header = BOILERPLATE_PREFIXES
            .iter()
            .any(|prefix| line.starts_with(prefix));

        (is_toc || is_header).then_some(LineClass::Boilerplate)
    }
}
