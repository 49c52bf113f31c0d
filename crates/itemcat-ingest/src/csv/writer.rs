//! CSV serialization for merge results.

use std::fs;
use std::path::Path;

use itemcat_model::ResultRow;

use crate::error::{IngestError, Result};

/// Escapes a single field for CSV output.
///
/// Fields containing a comma, quote, or newline are wrapped in double
/// quotes with embedded quotes doubled; everything else is emitted verbatim.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        let mut escaped = String::with_capacity(field.len() + 2);
        escaped.push('"');
        for c in field.chars() {
            if c == '"' {
                escaped.push('"');
            }
            escaped.push(c);
        }
        escaped.push('"');
        escaped
    } else {
        field.to_string()
    }
}

/// Serializes one record, escaping each field individually.
pub fn format_record<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Serializes the header and result rows to CSV text.
///
/// Rows are joined with a single `\n`; no trailing newline after the last
/// row.
pub fn to_csv(header: &[&str], rows: &[ResultRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_record(header.iter().copied()));
    for row in rows {
        lines.push(format_record(row.fields()));
    }
    lines.join("\n")
}

/// Serializes and writes the full output in one call.
///
/// Either the whole file is written or none of it; there is no partial
/// output mode.
pub fn write_csv(path: &Path, header: &[&str], rows: &[ResultRow]) -> Result<()> {
    let text = to_csv(header, rows);
    fs::write(path, text).map_err(|e| IngestError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, translated: &str, label: &str) -> ResultRow {
        ResultRow {
            id: id.to_string(),
            name: name.to_string(),
            translated_name: translated.to_string(),
            category_label: label.to_string(),
        }
    }

    #[test]
    fn test_escape_plain_field_verbatim() {
        assert_eq!(escape_field("Chair"), "Chair");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_escape_comma_quote_newline() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_to_csv_no_trailing_newline() {
        let rows = vec![row("10", "Chair", "Chair-EN", "Seating")];
        let csv = to_csv(&["ItemID", "ChineseName", "EnglishName", "ItemType"], &rows);
        assert_eq!(
            csv,
            "ItemID,ChineseName,EnglishName,ItemType\n10,Chair,Chair-EN,Seating"
        );
    }

    #[test]
    fn test_to_csv_escapes_fields() {
        let rows = vec![row("10", "高脚椅, 红", "Tall \"Chair\"", "Seating")];
        let csv = to_csv(&["ItemID", "ChineseName", "EnglishName", "ItemType"], &rows);
        let data_line = csv.lines().nth(1).unwrap();
        assert_eq!(data_line, "10,\"高脚椅, 红\",\"Tall \"\"Chair\"\"\",Seating");
    }
}
