//! Data model for the bilingual item-catalog merge tool.

pub mod config;
pub mod table;

pub use config::{CategoryConfig, JoinConfig, MISSING_NAME, UNKNOWN_CATEGORY_LABEL};
pub use table::{Record, ResultRow, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_config_serializes() {
        let config = CategoryConfig::new(
            ["57"],
            [("57", "Seating")],
            UNKNOWN_CATEGORY_LABEL,
        );
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: CategoryConfig = serde_json::from_str(&json).expect("deserialize config");
        assert!(round.is_allowed("57"));
        assert_eq!(round.label_for("57"), "Seating");
    }
}
