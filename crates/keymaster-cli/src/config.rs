//! Optional `config.toml` with the record database location.
//!
//! The CLI only ever reads this file; users create it by hand when the
//! default XDG data path does not suit them.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct KeymasterConfig {
    pub database: DatabaseSection,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSection {
    pub path: String,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_dir("XDG_CONFIG_HOME", &[".config"])?.join("config.toml"))
}

pub fn default_db_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_dir("XDG_DATA_HOME", &[".local", "share"])?.join("records.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<KeymasterConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// XDG base directory with the keymaster subdirectory appended.
///
/// `fallback` is the path under $HOME used when the variable is unset
/// or blank.
fn xdg_dir(env_key: &str, fallback: &[&str]) -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env_key) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("keymaster"));
        }
    }

    let mut dir = home_dir()?;
    for part in fallback {
        dir.push(part);
    }
    dir.push("keymaster");
    Ok(dir)
}

fn home_dir() -> anyhow::Result<PathBuf> {
    match std::env::var("HOME") {
        Ok(home) => Ok(PathBuf::from(home)),
        Err(_) => Err(anyhow::anyhow!(
            "HOME is not set; cannot resolve default paths"
        )),
    }
}
