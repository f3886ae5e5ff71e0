use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use prodtrack_ingest::{find_workbook, read_sheet};
use prodtrack_model::StepGroupConfig;
use prodtrack_transform::{classify_columns, export_records, group_companies};

use crate::cli::{ClassifyArgs, CompaniesArgs, ExportArgs};
use crate::summary::{print_classification, print_company_summary};

pub fn run_companies(args: &CompaniesArgs) -> Result<()> {
    let workbook = resolve_workbook(&args.workbook)?;
    let span = info_span!("companies", workbook = %workbook.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_sheet(&workbook, &args.sheet)
        .with_context(|| format!("load sheet '{}'", args.sheet))?;
    let groups = group_companies(&table, &args.customer_col)?;
    write_json(&args.output, &groups)?;
    info!(
        companies = groups.len(),
        orders = table.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "company summary written"
    );
    print_company_summary(&groups);
    println!("Wrote {} companies to {}", groups.len(), args.output.display());
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let workbook = resolve_workbook(&args.workbook)?;
    let span = info_span!("export", workbook = %workbook.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_sheet(&workbook, &args.sheet)
        .with_context(|| format!("load sheet '{}'", args.sheet))?;
    let records = export_records(&table, &args.id_col)?;
    let skipped = table.rows.len() - records.len();
    if skipped > 0 {
        info!(skipped, id_col = %args.id_col, "rows without an identifier were excluded");
    }
    write_json(&args.output, &records)?;
    info!(
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "records written"
    );
    println!("Wrote {} records to {}", records.len(), args.output.display());
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let workbook = resolve_workbook(&args.workbook)?;
    let span = info_span!("classify", workbook = %workbook.display());
    let _guard = span.enter();
    let table = read_sheet(&workbook, &args.sheet)
        .with_context(|| format!("load sheet '{}'", args.sheet))?;
    let classification = classify_columns(&table, &args.info_cols);
    let config = match &args.groups {
        Some(path) => Some(load_step_groups(path)?),
        None => None,
    };
    if let Some(config) = &config {
        for group in &config.groups {
            if !classification.main_steps.iter().any(|name| name == &group.main) {
                warn!(main = %group.main, "configured status column not found in sheet");
            }
        }
    }
    print_classification(&classification, config.as_ref());
    Ok(())
}

/// Accepts either a workbook path or a directory to search.
fn resolve_workbook(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(find_workbook(path)?)
    } else {
        Ok(path.to_path_buf())
    }
}

fn load_step_groups(path: &Path) -> Result<StepGroupConfig> {
    let file = File::open(path)
        .with_context(|| format!("open step groups file {}", path.display()))?;
    let config: StepGroupConfig = serde_json::from_reader(file)
        .with_context(|| format!("parse step groups file {}", path.display()))?;
    Ok(config)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("write output file {}", path.display()))?;
    Ok(())
}
