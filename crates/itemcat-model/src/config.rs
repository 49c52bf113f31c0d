//! Merge configuration passed explicitly into the pipeline.
//!
//! The category allowlist and code-to-label mapping are plain values built
//! by the caller (the CLI ships defaults), never module-level statics, so
//! the pipeline stays testable with arbitrary mappings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Placeholder substituted when a name is missing or unresolvable.
pub const MISSING_NAME: &str = "N/A";

/// Default label for category codes inside the allowlist but outside the
/// label mapping.
pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown Type";

/// Column layout of the primary catalog and the header skip count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConfig {
    /// Leading header/metadata rows to skip.
    pub skip_rows: usize,
    /// Column index of the item id.
    pub id_col: usize,
    /// Column index of the display name.
    pub name_col: usize,
    /// Column index of the category code.
    pub category_col: usize,
}

impl JoinConfig {
    /// Minimum column count a record needs before the indices are safe to use.
    pub fn min_columns(&self) -> usize {
        self.id_col.max(self.name_col).max(self.category_col) + 1
    }
}

/// Category allowlist and code-to-label mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    allowlist: BTreeSet<String>,
    labels: BTreeMap<String, String>,
    unknown_label: String,
}

impl CategoryConfig {
    pub fn new<A, L, S, K, V>(allowlist: A, labels: L, unknown_label: impl Into<String>) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
        L: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            allowlist: allowlist.into_iter().map(Into::into).collect(),
            labels: labels
                .into_iter()
                .map(|(code, label)| (code.into(), label.into()))
                .collect(),
            unknown_label: unknown_label.into(),
        }
    }

    /// Returns true when the category code qualifies a row for output.
    pub fn is_allowed(&self, code: &str) -> bool {
        self.allowlist.contains(code)
    }

    /// Resolves a code to its label, falling back to the unknown-type label.
    pub fn label_for(&self, code: &str) -> &str {
        self.labels
            .get(code)
            .map_or(self.unknown_label.as_str(), String::as_str)
    }

    /// Returns true when the code has an explicit label mapping.
    pub fn has_label(&self, code: &str) -> bool {
        self.labels.contains_key(code)
    }

    /// Code/label pairs in code order, for the `categories` listing.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }

    pub fn unknown_label(&self) -> &str {
        &self.unknown_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seating_only() -> CategoryConfig {
        CategoryConfig::new(["57", "99"], [("57", "Seating")], UNKNOWN_CATEGORY_LABEL)
    }

    #[test]
    fn min_columns_covers_largest_index() {
        let config = JoinConfig {
            skip_rows: 2,
            id_col: 0,
            name_col: 1,
            category_col: 16,
        };
        assert_eq!(config.min_columns(), 17);
    }

    #[test]
    fn allowlist_membership() {
        let config = seating_only();
        assert!(config.is_allowed("57"));
        assert!(!config.is_allowed("58"));
    }

    #[test]
    fn unmapped_code_gets_unknown_label() {
        let config = seating_only();
        assert_eq!(config.label_for("57"), "Seating");
        assert_eq!(config.label_for("99"), UNKNOWN_CATEGORY_LABEL);
    }
}
