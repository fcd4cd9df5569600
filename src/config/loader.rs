use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::config::FileConfig;

/// Parse a TOML or YAML settings file, picked by extension
pub fn load_from_file(file_path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(file_path).context("error reading config file")?;
    let extension = file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let config: FileConfig = match extension.as_deref() {
        Some("toml") => toml::from_str(&contents).context("toml parsing failed")?,
        Some("yml") | Some("yaml") => {
            serde_yml::from_str(&contents).context("yaml parsing failed")?
        }
        _ => bail!("unrecognized config file extension (expected .toml, .yml or .yaml)"),
    };
    Ok(config)
}

/// Load `KEY=value` pairs from a dotenv file into the process environment.
///
/// Variables already set in the environment win. A missing file is only an
/// error when `required` is set.
pub fn load_env_file(file_path: &Path, required: bool) -> Result<()> {
    match dotenvy::from_path(file_path) {
        Ok(()) => {
            log::debug!("loaded environment from {}", file_path.display());
            Ok(())
        }
        Err(e) if e.not_found() && !required => {
            log::debug!("no env file at {}, using process environment", file_path.display());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("error loading {}", file_path.display())),
    }
}
