//! Quote-aware CSV parsing over whole files.
//!
//! Catalog exports carry quoted fields with embedded commas, escaped quotes
//! (`""`), and raw newlines inside quoted fields, so records are recovered
//! by a single character scan rather than a line split.

use std::fs;
use std::path::Path;

use tracing::debug;

use itemcat_model::{Record, Table};

use crate::error::{IngestError, Result};

/// Parses raw CSV text into a table of records.
///
/// Two scan modes: outside quotes, `,` ends a field and `\n` ends a record;
/// a quote only opens quoted mode when the pending field is still empty.
/// A quote appearing mid-unquoted-field is kept as a literal character —
/// real-world exports contain these, so they are deliberately not treated
/// as an error. Inside quotes, `""` is a literal quote, a lone quote closes
/// the field, and everything else (raw newlines included) passes through,
/// which is how multi-line quoted fields stay attributed to one record.
pub fn parse_table(text: &str) -> Table {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut records: Vec<Record> = Vec::new();
    let mut record: Record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = normalized.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                ',' => record.push(std::mem::take(&mut field)),
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut record));
                }
                '"' if field.is_empty() => in_quotes = true,
                _ => field.push(c),
            }
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    // A trailing blank line parses as one empty field; drop it.
    if records
        .last()
        .is_some_and(|last| last.len() == 1 && last[0].is_empty())
    {
        records.pop();
    }

    Table::new(records)
}

/// Reads a catalog file into memory and parses it.
///
/// Strips a UTF-8 BOM if present. Field text is passed through verbatim;
/// trimming is left to the lookup and join stages.
pub fn read_table(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let table = parse_table(text);
    debug!(path = %path.display(), records = table.len(), "parsed catalog file");
    Ok(table)
}
