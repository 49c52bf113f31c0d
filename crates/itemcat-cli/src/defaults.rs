//! Built-in file names, column layout, and category tables.
//!
//! These are the shipped defaults for the stock catalog exports. They are
//! handed to the pipeline as explicit values, so tests and future callers
//! can substitute their own.

use itemcat_model::{CategoryConfig, JoinConfig, UNKNOWN_CATEGORY_LABEL};

/// Default primary (Chinese) catalog file name.
pub const CHINESE_CATALOG: &str = "Items_cn.csv";

/// Default secondary (English) catalog file name.
pub const ENGLISH_CATALOG: &str = "Items_en.csv";

/// Default merged output file name.
pub const OUTPUT_FILE: &str = "ItemPairs.csv";

/// Output column header.
pub const OUTPUT_HEADER: [&str; 4] = ["ItemID", "ChineseName", "EnglishName", "ItemType"];

/// Header/metadata rows at the top of both exports.
pub const HEADER_SKIP_ROWS: usize = 2;

/// Secondary catalog column layout: id, name.
pub const ENGLISH_ID_COL: usize = 0;
pub const ENGLISH_NAME_COL: usize = 1;

/// Primary catalog column layout.
pub fn join_config() -> JoinConfig {
    JoinConfig {
        skip_rows: HEADER_SKIP_ROWS,
        id_col: 0,
        name_col: 1,
        category_col: 16,
    }
}

/// Furnishing category codes kept in the merged output.
pub fn category_config() -> CategoryConfig {
    CategoryConfig::new(
        ["56", "57", "58", "59", "60"],
        [
            ("56", "Wall-mounted"),
            ("57", "Seating"),
            ("58", "Tables"),
            ("59", "Tabletop"),
            ("60", "Rugs"),
        ],
        UNKNOWN_CATEGORY_LABEL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_consistent() {
        let categories = category_config();
        for (code, _label) in categories.labels() {
            assert!(categories.is_allowed(code));
        }
        assert_eq!(categories.label_for("57"), "Seating");
    }

    #[test]
    fn join_config_requires_seventeen_columns() {
        assert_eq!(join_config().min_columns(), 17);
    }
}
