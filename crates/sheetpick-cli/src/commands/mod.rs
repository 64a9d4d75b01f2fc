//! CLI subcommands.

pub mod clean;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use sheetpick_core::SheetpickConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sheetpick")
        .join("config.json")
}

/// Path given with `--config`, or the default location.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration from `--config`, the default file if present, or defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<SheetpickConfig> {
    if let Some(path) = explicit {
        return Ok(SheetpickConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config file {}", path.display());
        Ok(SheetpickConfig::from_file(&path)?)
    } else {
        Ok(SheetpickConfig::default())
    }
}

/// Spinner shown while a workbook is decrypted and parsed.
pub fn spinner(message: String) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// File name of an input path, for extension checks and output naming.
pub fn input_file_name(input: &Path) -> anyhow::Result<&str> {
    input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid input path: {}", input.display()))
}
