//! Error types for catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing catalog files.
///
/// Data irregularities (short rows, missing ids, unmapped codes) are not
/// errors: they are handled row-locally with skip or sentinel policies.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Catalog file not found.
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a catalog file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/Items_cn.csv"),
        };
        assert_eq!(
            err.to_string(),
            "catalog file not found: /path/to/Items_cn.csv"
        );
    }
}
