use crate::commands::{print_json, Context};
use crate::util::parse_phone;
use anyhow::{Context as _, Result};
use clap::{ArgAction, Args};
use orderlink_sheet::export::mark_done_in_export;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct MarkArgs {
    /// Sheet previously written by `build --out`
    pub export: PathBuf,
    #[arg(long)]
    pub phone: String,
    /// Clear the flag instead of setting it
    #[arg(long, action = ArgAction::SetTrue)]
    pub undo: bool,
}

#[derive(Debug, Serialize)]
struct MarkReport {
    phone: String,
    done: bool,
    previous: bool,
}

pub fn mark(ctx: &Context<'_>, args: MarkArgs) -> Result<()> {
    let phone = parse_phone(&args.phone)?;
    let done = !args.undo;

    let data = fs::read_to_string(&args.export)
        .with_context(|| format!("read export file {}", args.export.display()))?;
    let outcome = mark_done_in_export(&data, &phone, done)?;
    if outcome.previous == done {
        debug!(phone = %phone.display(), done, "done flag unchanged");
    }
    fs::write(&args.export, &outcome.data)
        .with_context(|| format!("write export file {}", args.export.display()))?;

    let report = MarkReport {
        phone: outcome.phone.display(),
        done,
        previous: outcome.previous,
    };
    if ctx.json {
        return print_json(&report);
    }

    let state = if done { "done" } else { "not done" };
    println!("{} marked {}", report.phone, state);
    Ok(())
}
