use serde::Serialize;

/// One logical CSV row: an ordered list of field strings, positional.
pub type Record = Vec<String>;

/// An ordered list of records parsed from one source file.
///
/// The first N records may be header/metadata rows; callers skip them via
/// the configured skip count rather than the table stripping them here, so
/// the table always reflects the file as parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the number of records, headers included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over data records, skipping the leading header rows.
    pub fn data_records(&self, skip_rows: usize) -> impl Iterator<Item = &Record> {
        self.records.iter().skip(skip_rows)
    }
}

/// One merged output entry.
///
/// Invariant: `id` is non-empty and the source row's category code was in
/// the allowlist. Missing names carry the `"N/A"` sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// Item identifier shared by both catalogs.
    pub id: String,
    /// Display name from the primary (Chinese) catalog.
    pub name: String,
    /// Display name resolved from the secondary (English) catalog.
    pub translated_name: String,
    /// Human-readable category label.
    pub category_label: String,
}

impl ResultRow {
    /// Fields in output-column order (`ItemID,ChineseName,EnglishName,ItemType`).
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.id,
            &self.name,
            &self.translated_name,
            &self.category_label,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_records_skips_headers() {
        let table = Table::new(vec![
            vec!["key".to_string()],
            vec!["0".to_string()],
            vec!["10".to_string()],
        ]);
        let data: Vec<&Record> = table.data_records(2).collect();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0][0], "10");
    }

    #[test]
    fn fields_follow_output_column_order() {
        let row = ResultRow {
            id: "10".to_string(),
            name: "Chair".to_string(),
            translated_name: "Chair-EN".to_string(),
            category_label: "Seating".to_string(),
        };
        assert_eq!(row.fields(), ["10", "Chair", "Chair-EN", "Seating"]);
    }
}
