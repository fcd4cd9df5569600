use clap::Parser;
use std::path::PathBuf;

use crate::config::Options;

/// Export the LibreNMS device list to a spreadsheet or CSV file
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Output format: csv or excel
    #[arg(short, long, default_value = "excel")]
    pub format: String,

    /// Output file; the format's extension is appended when missing
    /// [default: device_list.xlsx]
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Column set to export: full (14 columns) or basic (9 columns)
    #[arg(short, long)]
    pub columns: Option<String>,

    /// HTTP request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Dotenv file providing URL and TOKEN [default: .env]
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Optional TOML or YAML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
impl Args {
    pub fn options(&self) -> Options {
        Options {
            format: self.format.clone(),
            outfile: self.outfile.clone(),
            columns: self.columns.clone(),
            timeout: self.timeout,
            insecure: self.insecure,
            env_file: self.env_file.clone(),
            config_file: self.config.clone(),
        }
    }
}
