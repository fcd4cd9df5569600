use std::path::PathBuf;
use std::time::Duration;

use crate::config::FileConfig;
use crate::device::ColumnSet;
use crate::error::{Error, Result};
use crate::export::ExportFormat;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTFILE_STEM: &str = "device_list";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Raw command-line choices, before validation
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub format: String,
    pub outfile: Option<PathBuf>,
    pub columns: Option<String>,
    pub timeout: Option<u64>,
    pub insecure: bool,
    pub env_file: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// Validated run configuration. Built once at startup and never changed.
#[derive(Debug, Clone)]
pub struct Config {
    url: String,
    token: String,
    timeout: Duration,
    tls_insecure: bool,
    columns: ColumnSet,
    format: ExportFormat,
    output_path: PathBuf,
}
impl Config {
    /// Merge CLI options, environment and settings file.
    ///
    /// Precedence is CLI, then environment (`URL`, `TOKEN`), then the
    /// settings file, then built-in defaults.
    pub fn resolve<F>(options: &Options, file: &FileConfig, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format: ExportFormat = options.format.parse()?;

        let url = env("URL")
            .or_else(|| file.url().map(str::to_string))
            .ok_or_else(|| Error::Config("URL is not set".to_string()))?;
        let url = validate_base_url(&url)?;

        let token = env("TOKEN")
            .or_else(|| file.token().map(str::to_string))
            .ok_or_else(|| Error::Config("TOKEN is not set".to_string()))?;
        if token.is_empty() {
            log::warn!("TOKEN is empty, the API will most likely reject the request");
        }

        let timeout = options
            .timeout
            .or(file.timeout())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            return Err(Error::Config("timeout must be at least 1 second".to_string()));
        }

        let columns = match options.columns.as_deref().or(file.columns()) {
            Some(c) => c.parse()?,
            None => ColumnSet::default(),
        };

        let output_path = options
            .outfile
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTFILE_STEM));

        Ok(Config {
            url,
            token,
            timeout: Duration::from_secs(timeout),
            tls_insecure: options.insecure || file.tls_insecure().unwrap_or(false),
            columns,
            format,
            output_path,
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
    pub fn token(&self) -> &str {
        self.token.as_str()
    }
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
    pub fn tls_insecure(&self) -> bool {
        self.tls_insecure
    }
    pub fn columns(&self) -> ColumnSet {
        self.columns
    }
    pub fn format(&self) -> ExportFormat {
        self.format
    }
    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }
}

/// Check that `raw` is an absolute http(s) origin and strip trailing slashes
fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("URL is empty".to_string()));
    }

    let parsed = url::Url::parse(trimmed)
        .map_err(|e| Error::Config(format!("URL '{trimmed}' is not valid: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "URL '{trimmed}' must use http or https"
        )));
    }
    if parsed.host_str().is_none() {
        return Err(Error::Config(format!("URL '{trimmed}' has no host")));
    }

    Ok(trimmed.to_string())
}
