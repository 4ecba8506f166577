use crate::commands::{load_batch, print_json, Context};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    pub sheet: PathBuf,
}

pub fn preview(ctx: &Context<'_>, args: PreviewArgs) -> Result<()> {
    let batch = load_batch(ctx, &args.sheet)?;
    if ctx.json {
        return print_json(&batch);
    }

    println!(
        "Valid numbers: {} ({} rows, {} without phone, {} duplicates)",
        batch.len(),
        batch.report.rows,
        batch.report.without_phone,
        batch.report.duplicates
    );
    for record in &batch.records {
        println!();
        println!("{}", record.phone.display());
        for line in record.message.lines() {
            println!("  {}", line);
        }
        println!("  -> {}", record.link);
    }
    Ok(())
}
