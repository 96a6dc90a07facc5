//! User configuration (`config.toml`).
//!
//! ```toml
//! [variance]
//! earlier = "2022"
//! later = "2024"
//!
//! [columns]
//! new_width = 180
//!
//! [output]
//! format = "json"
//!
//! [[rows]]
//! id = 1
//! label = "Sales"
//! type = "Revenue"
//! 2021 = "1,000"
//! ```

use anyhow::{Context, bail};
use directories::ProjectDirs;
use finsheet_core::{FiscalYear, SeedRow, VariancePair};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub variance: Option<VarianceConfig>,
    #[serde(default)]
    pub columns: ColumnsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Replaces the built-in statement when present.
    pub rows: Option<Vec<SeedRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VarianceConfig {
    pub earlier: FiscalYear,
    pub later: FiscalYear,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsConfig {
    pub new_width: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl Config {
    pub fn variance_pair(&self) -> anyhow::Result<VariancePair> {
        let Some(variance) = &self.variance else {
            return Ok(VariancePair::default());
        };
        if variance.earlier == variance.later {
            bail!("variance.earlier and variance.later must be different years");
        }
        Ok(VariancePair {
            earlier: variance.earlier,
            later: variance.later,
        })
    }
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "finsheet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load configuration.
///
/// An explicit `path` must exist. The per-user default is optional. Returns
/// the config and any warnings worth showing the user.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Vec<String>)> {
    let mut warnings = Vec::new();

    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok((Config::default(), warnings)),
        },
    };

    if !path.exists() {
        if explicit {
            bail!("Config file not found: {}", path.display());
        }
        log::debug!("no config at {}", path.display());
        return Ok((Config::default(), warnings));
    }

    let meta = std::fs::metadata(&path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        warnings.push(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
        return Ok((Config::default(), warnings));
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok((config, warnings))
}

pub fn parse_config(content: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.variance_pair()?;
    Ok(config)
}
