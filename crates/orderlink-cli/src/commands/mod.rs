use anyhow::{Context as _, Result};
use orderlink_config::AppConfig;
use orderlink_core::{run_pipeline, OrderBatch};
use orderlink_sheet::source::{FileSource, SheetSource};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

pub mod build;
pub mod completions;
pub mod mark;
pub mod preview;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Reads the order sheet at `path` and runs it through the pipeline.
pub fn load_batch(ctx: &Context<'_>, path: &Path) -> Result<OrderBatch> {
    let source = FileSource::open(path)?;
    let sheet = source
        .fetch_sheet()
        .with_context(|| format!("read order sheet {}", source.source_name()))?;
    debug!(
        source = %source.source_name(),
        columns = sheet.column_count(),
        rows = sheet.rows.len(),
        "sheet loaded"
    );

    let batch = run_pipeline(&sheet, &ctx.config.pipeline);
    for warning in &batch.report.warnings {
        warn!("{warning}");
    }
    debug!(
        records = batch.report.records,
        without_phone = batch.report.without_phone,
        duplicates = batch.report.duplicates,
        "pipeline finished"
    );
    Ok(batch)
}
