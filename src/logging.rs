//! Logger setup.
//!
//! The game owns the terminal, so it can only log to a file. The data tools
//! log to stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

fn config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build()
}

/// Log everything from `Debug` up into `path`, truncating it.
pub fn to_file(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, config(), file).context("logger already set")
}

/// Log `Info` and up to stderr.
pub fn to_stderr() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("logger already set")
}
