use crate::commands::{load_batch, print_json, Context};
use crate::util::parse_phone;
use anyhow::{Context as _, Result};
use clap::{ArgAction, Args};
use orderlink_core::RunReport;
use orderlink_sheet::export::{export_csv, export_json, ExportOptions};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Order sheet (.csv or .tsv); the first row holds the column names
    pub sheet: PathBuf,
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Write raw links instead of HYPERLINK formulas
    #[arg(long, action = ArgAction::SetTrue)]
    pub plain_links: bool,
    /// Leave out the done column
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_done_column: bool,
    /// Mark the order for this phone as done (repeatable)
    #[arg(long, value_name = "PHONE")]
    pub done: Vec<String>,
}

#[derive(Debug, Serialize)]
struct BuildReport<'a> {
    output: String,
    #[serde(flatten)]
    run: &'a RunReport,
}

pub fn build(ctx: &Context<'_>, args: BuildArgs) -> Result<()> {
    let mut batch = load_batch(ctx, &args.sheet)?;

    for raw in &args.done {
        let phone = parse_phone(raw)?;
        batch
            .mark_done(&phone, true)
            .with_context(|| format!("mark {} done", phone.display()))?;
    }

    let options = ExportOptions {
        hyperlink: ctx.config.export.hyperlink && !args.plain_links,
        link_label: ctx.config.export.link_label.clone(),
        done_column: ctx.config.export.done_column && !args.no_done_column,
    };

    match args.out.as_deref() {
        Some(path) => {
            write_file(path, &export_csv(&batch.records, &options))?;
            if ctx.json {
                print_json(&BuildReport {
                    output: path.display().to_string(),
                    run: &batch.report,
                })?;
            } else {
                println!(
                    "Exported {} orders to {} ({} rows, {} without phone, {} duplicates)",
                    batch.len(),
                    path.display(),
                    batch.report.rows,
                    batch.report.without_phone,
                    batch.report.duplicates
                );
            }
        }
        None => {
            if ctx.json {
                print!("{}", export_json(&batch)?);
            } else {
                print!("{}", export_csv(&batch.records, &options));
            }
        }
    }
    Ok(())
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create export directory {}", parent.display()))?;
        }
    }
    fs::write(path, data).with_context(|| format!("write export file {}", path.display()))
}
