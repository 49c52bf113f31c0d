use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Counters accumulated while joining. Purely observational: they never
/// change which rows qualify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    /// Data records examined (headers excluded).
    pub records_scanned: usize,
    /// Records skipped for having too few columns.
    pub skipped_short: usize,
    /// Records whose category code was empty or outside the allowlist.
    pub skipped_category: usize,
    /// Allowlisted records dropped for an empty id.
    pub skipped_missing_id: usize,
    /// Emitted rows whose id had no entry in the secondary lookup.
    pub lookup_misses: usize,
    /// Emitted rows whose category code had no label mapping.
    pub unknown_categories: usize,
}

/// Result of one merge run, consumed by the summary printer and the JSON
/// run report.
#[derive(Debug)]
pub struct MergeResult {
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    /// Number of merged entries written.
    pub entries: usize,
    pub stats: JoinStats,
    /// Emitted-row counts keyed by category label.
    pub category_counts: BTreeMap<String, usize>,
    /// Non-fatal errors (the merge output itself was written).
    pub errors: Vec<String>,
}
