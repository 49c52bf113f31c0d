use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use itemcat_cli::defaults;
use itemcat_cli::pipeline::{OutputConfig, ingest, join_and_filter, output};
use itemcat_cli::types::MergeResult;
use itemcat_ingest::build_name_lookup;

use crate::cli::MergeArgs;
use crate::summary::apply_table_style;

pub fn run_merge(args: &MergeArgs) -> Result<MergeResult> {
    let merge_span = info_span!("merge");
    let _merge_guard = merge_span.enter();

    let (primary, secondary) = ingest(&args.chinese, &args.english)?;
    let lookup = build_name_lookup(
        &secondary,
        defaults::HEADER_SKIP_ROWS,
        defaults::ENGLISH_ID_COL,
        defaults::ENGLISH_NAME_COL,
    );
    let outcome = join_and_filter(
        &primary,
        &lookup,
        &defaults::join_config(),
        &defaults::category_config(),
    );
    let written = output(
        &OutputConfig {
            output: &args.output,
            report: args.report.as_deref(),
            header: &defaults::OUTPUT_HEADER,
        },
        &outcome,
    )?;

    Ok(MergeResult {
        output: written.output,
        report: written.report,
        entries: outcome.rows.len(),
        stats: outcome.stats,
        category_counts: outcome.category_counts,
        errors: written.errors,
    })
}

pub fn run_categories() -> Result<()> {
    let categories = defaults::category_config();
    let mut table = Table::new();
    table.set_header(vec!["Code", "Label"]);
    apply_table_style(&mut table);
    for (code, label) in categories.labels() {
        table.add_row(vec![code, label]);
    }
    println!("{table}");
    println!("Unmapped allowlisted codes: {}", categories.unknown_label());
    Ok(())
}
