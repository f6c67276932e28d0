//! YAML rendering of segmented documents.

use serde::Serialize;

use crate::error::Result;
use crate::types::{Document, Record};

/// Document representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlDocument<'a> {
    document: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    warnings: &'a [String],
    records: &'a [Record],
}

fn is_empty(warnings: &&[String]) -> bool {
    warnings.is_empty()
}

/// Generate a YAML string from a document.
///
/// Output starts with a document start marker and carries no trailing
/// whitespace on any line.
pub fn generate_yaml(document: &Document) -> Result<String> {
    let yaml_struct = YamlDocument {
        document: &document.id,
        warnings: &document.warnings,
        records: &document.records,
    };
    let yaml_string = serde_yaml_ng::to_string(&yaml_struct)?;

    let lines: Vec<&str> = yaml_string.lines().map(str::trim_end).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}
