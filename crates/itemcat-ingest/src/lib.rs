//! Catalog ingestion: CSV parsing/serialization and name-lookup building.

pub mod csv;
pub mod error;
pub mod lookup;

pub use csv::parser::{parse_table, read_table};
pub use csv::writer::{escape_field, format_record, to_csv, write_csv};
pub use error::{IngestError, Result};
pub use lookup::{NameLookup, build_name_lookup};
