//! Straight and balloon commands - extract term-sheet fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use sheetpick_core::workbook::{check_extension, TERM_SHEET_EXTENSIONS};
use sheetpick_core::{extract_term_sheet, ExtractedRecord, TermVariant};

use super::{input_file_name, load_config, spinner};

/// Arguments for the term-sheet commands.
#[derive(Args)]
pub struct ExtractArgs {
    /// Term-sheet workbook (.xlsx)
    #[arg(required = true)]
    input: PathBuf,

    /// Address to include in the record
    #[arg(short, long, default_value = "")]
    address: String,

    /// Password for an encrypted workbook
    #[arg(short, long)]
    password: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also copy the tab-separated line to the clipboard
    #[arg(long)]
    copy: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated line for pasting into a spreadsheet row
    Tsv,
    /// JSON object in field order
    Json,
    /// CSV with a header row
    Csv,
    /// One "FIELD: value" line per field
    Text,
}

pub fn run(args: ExtractArgs, variant: TermVariant, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let file_name = input_file_name(&args.input)?;
    check_extension(file_name, TERM_SHEET_EXTENSIONS)?;

    info!("Processing file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let pb = spinner(format!("Reading {}...", file_name))?;
    let result = extract_term_sheet(
        data,
        args.password.as_deref(),
        &args.address,
        variant,
        &config,
    );
    pb.finish_and_clear();
    let record = result?;

    let output = format_record(&record, variant, args.format, config.extraction.pad_width)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.copy {
        copy_to_clipboard(&record.to_tab_line(config.extraction.pad_width))?;
        println!("{} Copied to clipboard", style("✓").green());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(
    record: &ExtractedRecord,
    variant: TermVariant,
    format: OutputFormat,
    pad_width: usize,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Tsv => Ok(record.to_tab_line(pad_width)),
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record, variant)),
    }
}

fn copy_to_clipboard(line: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| anyhow::anyhow!("Clipboard unavailable: {}", e))?;
    clipboard.set_text(line)?;
    debug!("Copied {} characters to clipboard", line.len());
    Ok(())
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(record.names())?;
    wtr.write_record(record.values().map(ToString::to_string))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data.trim_end().to_string())
}

fn format_text(record: &ExtractedRecord, variant: TermVariant) -> String {
    let mut output = String::new();

    output.push_str(variant.title());
    output.push('\n');

    for (name, value) in record.iter() {
        output.push_str(&format!("{}: {}\n", name, value));
    }

    output.trim_end().to_string()
}
