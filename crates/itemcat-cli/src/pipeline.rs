//! Merge pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read both catalog files into memory and parse them
//! 2. **Lookup**: Build the id-to-name lookup from the secondary catalog
//! 3. **Join**: Filter the primary catalog by category and resolve names
//! 4. **Output**: Serialize to CSV, write the file and optional JSON report
//!
//! File errors are fatal; irregular rows are skipped and counted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span, trace};

use itemcat_ingest::{NameLookup, read_table, write_csv};
use itemcat_model::{CategoryConfig, JoinConfig, MISSING_NAME, ResultRow, Table};

use crate::types::JoinStats;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Reads and parses both catalog files.
pub fn ingest(chinese: &Path, english: &Path) -> Result<(Table, Table)> {
    let ingest_span = info_span!("ingest");
    let _ingest_guard = ingest_span.enter();
    let ingest_start = Instant::now();

    let primary =
        read_table(chinese).with_context(|| format!("read {}", chinese.display()))?;
    let secondary =
        read_table(english).with_context(|| format!("read {}", english.display()))?;

    info!(
        chinese_records = primary.len(),
        english_records = secondary.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok((primary, secondary))
}

// ============================================================================
// Stage 3: Join
// ============================================================================

/// Result of the join stage.
#[derive(Debug, Default)]
pub struct JoinOutcome {
    /// Qualifying rows in primary-table order.
    pub rows: Vec<ResultRow>,
    pub stats: JoinStats,
    /// Emitted-row counts keyed by category label.
    pub category_counts: BTreeMap<String, usize>,
}

/// Filters the primary table by category and joins names from the lookup.
///
/// Rows qualify in primary-table order; no reordering. Short rows, empty
/// category codes, codes outside the allowlist, and empty ids are skipped
/// silently (counted in the stats). Lookup misses and unmapped codes fall
/// back to their sentinels instead of failing.
pub fn join_and_filter(
    primary: &Table,
    lookup: &NameLookup,
    join: &JoinConfig,
    categories: &CategoryConfig,
) -> JoinOutcome {
    let join_span = info_span!("join");
    let _join_guard = join_span.enter();
    let join_start = Instant::now();

    let min_columns = join.min_columns();
    let mut outcome = JoinOutcome::default();

    for record in primary.data_records(join.skip_rows) {
        outcome.stats.records_scanned += 1;
        if record.len() < min_columns {
            outcome.stats.skipped_short += 1;
            trace!(columns = record.len(), "skipped short record");
            continue;
        }
        let category = record[join.category_col].trim();
        if category.is_empty() || !categories.is_allowed(category) {
            outcome.stats.skipped_category += 1;
            continue;
        }
        let id = record[join.id_col].trim();
        if id.is_empty() {
            outcome.stats.skipped_missing_id += 1;
            debug!(category, "skipped allowlisted record with empty id");
            continue;
        }
        let name = record[join.name_col].trim();
        let name = if name.is_empty() { MISSING_NAME } else { name };

        let translated_name = match lookup.get(id) {
            Some(translated) => translated.clone(),
            None => {
                outcome.stats.lookup_misses += 1;
                trace!(id, "no secondary name for item");
                MISSING_NAME.to_string()
            }
        };

        if !categories.has_label(category) {
            outcome.stats.unknown_categories += 1;
            debug!(category, "category code has no label mapping");
        }
        let category_label = categories.label_for(category).to_string();

        *outcome
            .category_counts
            .entry(category_label.clone())
            .or_insert(0) += 1;
        outcome.rows.push(ResultRow {
            id: id.to_string(),
            name: name.to_string(),
            translated_name,
            category_label,
        });
    }

    info!(
        records_scanned = outcome.stats.records_scanned,
        entries = outcome.rows.len(),
        skipped_short = outcome.stats.skipped_short,
        skipped_category = outcome.stats.skipped_category,
        lookup_misses = outcome.stats.lookup_misses,
        duration_ms = join_start.elapsed().as_millis(),
        "join complete"
    );
    outcome
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Output stage configuration.
pub struct OutputConfig<'a> {
    pub output: &'a Path,
    /// Optional JSON run-report path.
    pub report: Option<&'a Path>,
    pub header: &'a [&'a str],
}

/// Result of the output stage.
#[derive(Debug)]
pub struct OutputResult {
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    /// Non-fatal errors (report writing only).
    pub errors: Vec<String>,
}

/// JSON run report written beside the merged output.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    output: String,
    entries: usize,
    stats: &'a JoinStats,
    category_counts: &'a BTreeMap<String, usize>,
}

/// Serializes the result rows and writes the output file, plus the JSON
/// run report when requested.
///
/// The merged output is fatal on failure; a report-write failure is
/// recorded as a non-fatal error because the merge itself already
/// succeeded.
pub fn output(config: &OutputConfig<'_>, outcome: &JoinOutcome) -> Result<OutputResult> {
    let output_span = info_span!("output");
    let _output_guard = output_span.enter();
    let output_start = Instant::now();
    let mut errors = Vec::new();

    write_csv(config.output, config.header, &outcome.rows)
        .with_context(|| format!("write {}", config.output.display()))?;

    let report = match config.report {
        Some(path) => {
            let report = RunReport {
                output: config.output.display().to_string(),
                entries: outcome.rows.len(),
                stats: &outcome.stats,
                category_counts: &outcome.category_counts,
            };
            match write_run_report(path, &report) {
                Ok(()) => Some(path.to_path_buf()),
                Err(error) => {
                    errors.push(format!("run report: {error}"));
                    None
                }
            }
        }
        None => None,
    };

    info!(
        output = %config.output.display(),
        entries = outcome.rows.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(OutputResult {
        output: config.output.to_path_buf(),
        report,
        errors,
    })
}

fn write_run_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
