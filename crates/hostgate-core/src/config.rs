use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HostgateError;

/// Denylist section (`[denylist]` in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenylistConfig {
    /// Additional denied domain suffixes, appended after the built-in ones.
    #[serde(default)]
    pub extra_hosts: Vec<String>,
    /// Drop the built-in entries and use only `extra_hosts`.
    #[serde(default)]
    pub replace_builtin: bool,
}

/// Global configuration loaded from `~/.config/hostgate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostgateConfig {
    #[serde(default)]
    pub denylist: DenylistConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hostgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HostgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HostgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    Ok(load_from_path(&path)?)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from_path(path: &Path) -> std::result::Result<HostgateConfig, HostgateError> {
    let data = fs::read_to_string(path).map_err(|source| HostgateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| HostgateError::Config {
        path: path.to_path_buf(),
        source,
    })
}
