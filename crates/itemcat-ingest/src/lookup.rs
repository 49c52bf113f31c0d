//! Name lookups built from a parsed catalog table.

use std::collections::HashMap;

use tracing::debug;

use itemcat_model::{MISSING_NAME, Table};

/// Mapping from item id to display name.
pub type NameLookup = HashMap<String, String>;

/// Builds an id-to-name lookup from the given column positions.
///
/// Rows shorter than the larger index plus one are ignored, as are rows
/// whose trimmed id is empty. An empty name maps to the `"N/A"` sentinel.
/// Later duplicate ids overwrite earlier ones.
pub fn build_name_lookup(
    table: &Table,
    skip_rows: usize,
    id_col: usize,
    name_col: usize,
) -> NameLookup {
    let min_columns = id_col.max(name_col) + 1;
    let mut lookup = NameLookup::new();
    for record in table.data_records(skip_rows) {
        if record.len() < min_columns {
            continue;
        }
        let id = record[id_col].trim();
        if id.is_empty() {
            continue;
        }
        let name = record[name_col].trim();
        let name = if name.is_empty() { MISSING_NAME } else { name };
        lookup.insert(id.to_string(), name.to_string());
    }
    debug!(entries = lookup.len(), "built name lookup");
    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_builds_lookup_after_skip() {
        let table = table(&[
            &["key", "name"],
            &["#", "0"],
            &["10", "Chair-EN"],
            &["11", "Rock-EN"],
        ]);
        let lookup = build_name_lookup(&table, 2, 0, 1);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("10").map(String::as_str), Some("Chair-EN"));
        assert_eq!(lookup.get("11").map(String::as_str), Some("Rock-EN"));
    }

    #[test]
    fn test_short_rows_and_empty_ids_skipped() {
        let table = table(&[&["10"], &["  ", "blank id"], &["12", "Lamp-EN"]]);
        let lookup = build_name_lookup(&table, 0, 0, 1);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("12").map(String::as_str), Some("Lamp-EN"));
    }

    #[test]
    fn test_empty_name_gets_sentinel() {
        let table = table(&[&["10", "  "]]);
        let lookup = build_name_lookup(&table, 0, 0, 1);
        assert_eq!(lookup.get("10").map(String::as_str), Some(MISSING_NAME));
    }

    #[test]
    fn test_duplicate_ids_last_write_wins() {
        let table = table(&[&["10", "Old"], &["10", "New"]]);
        let lookup = build_name_lookup(&table, 0, 0, 1);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("10").map(String::as_str), Some("New"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let table = table(&[&[" 10 ", " Chair-EN "]]);
        let lookup = build_name_lookup(&table, 0, 0, 1);
        assert_eq!(lookup.get("10").map(String::as_str), Some("Chair-EN"));
    }
}
