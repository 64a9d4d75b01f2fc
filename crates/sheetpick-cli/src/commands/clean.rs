//! Clean command - filter a daily report and bundle the results.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use sheetpick_core::clean_report;

use super::{input_file_name, load_config, spinner};

/// Arguments for the clean command.
#[derive(Args)]
pub struct CleanArgs {
    /// Daily report workbook (.xls or .xlsx)
    #[arg(required = true)]
    input: PathBuf,

    /// Password for an encrypted workbook
    #[arg(short, long)]
    password: Option<String>,

    /// Directory the zip archive is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Rows of cleaned data to preview (default from config)
    #[arg(long)]
    preview: Option<usize>,
}

pub fn run(args: CleanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let file_name = input_file_name(&args.input)?;
    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let pb = spinner(format!("Cleaning {}...", file_name))?;
    let result = clean_report(data, args.password.as_deref(), file_name, &config);
    pb.finish_and_clear();
    let output = result?;

    fs::create_dir_all(&args.output_dir)?;
    let archive_path = args.output_dir.join(&output.archive.file_name);
    fs::write(&archive_path, &output.archive.bytes)?;

    println!(
        "{} Wrote {} ({} files)",
        style("✓").green(),
        archive_path.display(),
        output.archive.entries.len()
    );
    for entry in &output.archive.entries {
        println!("  - {}", entry);
    }

    let rows = args.preview.unwrap_or(config.cleaner.preview_rows);
    if rows > 0 {
        println!();
        println!(
            "{} First {} rows of the cleaned data:",
            style("ℹ").blue(),
            rows.min(output.report.cleaned.len())
        );
        println!("{}", output.preview(rows).to_text());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
