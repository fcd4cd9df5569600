use owo_colors::OwoColorize;
use std::path::PathBuf;

use crate::client;
use crate::config::config::DEFAULT_ENV_FILE;
use crate::config::{Config, FileConfig, Options, loader};
use crate::device::DeviceTable;
use crate::device::display::render_tail;
use crate::error::{Error, Result};
use crate::export;

/// Rows echoed to the console after a successful export
pub const TAIL_ROWS: usize = 6;
const RULE_WIDTH: usize = 80;

pub struct ExportSummary {
    pub table: DeviceTable,
    pub path: PathBuf,
}

/// Read the settings file and dotenv file, then resolve the run configuration
pub fn load_config(options: &Options) -> Result<Config> {
    let file = match &options.config_file {
        Some(path) => loader::load_from_file(path)
            .map_err(|e| Error::Config(format!("{}: {e:#}", path.display())))?,
        None => FileConfig::default(),
    };

    let (env_file, required) = match &options.env_file {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_ENV_FILE), false),
    };
    loader::load_env_file(&env_file, required).map_err(|e| Error::Config(format!("{e:#}")))?;

    Config::resolve(options, &file, |key| std::env::var(key).ok())
}

/// Fetch the device table and write it out
pub fn execute(config: &Config) -> Result<ExportSummary> {
    let table = client::fetch_devices(config)?;
    log::debug!("fetched {} devices", table.len());

    let path = export::export(&table, config.format(), config.output_path())?;
    log::debug!("export finished");

    Ok(ExportSummary { table, path })
}

/// Full run: configure, fetch, export, then print the last rows
pub fn run(options: &Options) -> Result<()> {
    let config = load_config(options)?;
    log::debug!("configuration loaded");

    println!("{}", rule("Getting LibreNMS Devices from API").bold());
    log::info!("LibreNMS URL: {}", config.url());

    let summary = execute(&config)?;
    print!("{}", render_tail(&summary.table, TAIL_ROWS));
    Ok(())
}

fn rule(title: &str) -> String {
    let padding = RULE_WIDTH.saturating_sub(title.chars().count() + 2);
    let left = padding / 2;
    format!(
        "{} {title} {}",
        "─".repeat(left),
        "─".repeat(padding - left)
    )
}
