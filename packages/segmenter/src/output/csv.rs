//! CSV rendering of record tables.
//!
//! Fields are quoted only when they contain a comma, a double quote, or a
//! line break; embedded quotes are doubled. Rows end in CRLF.

use std::borrow::Cow;

use crate::combine::CombinedRow;
use crate::config::{COLUMNS, COMBINED_COLUMNS};
use crate::types::Record;

const DELIMITER: char = ',';
const QUOTE: char = '"';
const LINE_TERMINATOR: &str = "\r\n";

/// Escape a single field for CSV output.
///
/// # Examples
/// ```
/// use regelrecht_segmenter::output::escape_field;
///
/// assert_eq!(escape_field("plain"), "plain");
/// assert_eq!(escape_field("a, b"), "\"a, b\"");
/// assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([DELIMITER, QUOTE, '\r', '\n']) {
        Cow::Owned(format!("{QUOTE}{}{QUOTE}", field.replace(QUOTE, "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Append one row of fields followed by the line terminator.
fn push_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&escape_field(field.as_ref()));
    }
    out.push_str(LINE_TERMINATOR);
}

/// Render records as a CSV table. The header row is always present.
pub fn generate_csv(records: &[Record]) -> String {
    let mut out = String::new();
    push_row(&mut out, &COLUMNS);
    for record in records {
        push_row(&mut out, &record.values());
    }
    out
}

/// Render combined rows as a CSV table with `law_name` and `global_index`.
pub fn generate_combined_csv(rows: &[CombinedRow]) -> String {
    let header: Vec<&str> = COLUMNS.iter().chain(COMBINED_COLUMNS.iter()).copied().collect();

    let mut out = String::new();
    push_row(&mut out, &header);
    for row in rows {
        let index = row.global_index.to_string();
        let mut fields: Vec<&str> = row.record.values().to_vec();
        fields.push(&row.law_name);
        fields.push(&index);
        push_row(&mut out, &fields);
    }
    out
}
