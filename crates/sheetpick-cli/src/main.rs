//! CLI for term-sheet extraction and MADPL report cleaning.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{clean, config, extract};
use sheetpick_core::TermVariant;

/// sheetpick - Pull fields out of term-sheet workbooks and clean daily reports
#[derive(Parser)]
#[command(name = "sheetpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a straight term agreement
    Straight(extract::ExtractArgs),

    /// Extract a balloon term agreement (3 years)
    Balloon(extract::ExtractArgs),

    /// Clean a MADPL 120 & 150 daily report
    Clean(clean::CleanArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Straight(args) => extract::run(args, TermVariant::Straight, cli.config.as_deref()),
        Commands::Balloon(args) => extract::run(args, TermVariant::Balloon, cli.config.as_deref()),
        Commands::Clean(args) => clean::run(args, cli.config.as_deref()),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
