//! Path resolution for the config file and record database.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_db_path, read_config};
use crate::errors::CliError;

/// Resolve the config file path, checking KEYMASTER_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("KEYMASTER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the database path from CLI args, config, or the default location.
///
/// Resolution order: `--db-path` flag (also fed by KEYMASTER_DB via clap),
/// then `config.toml`, then `$XDG_DATA_HOME/keymaster/records.db`. The
/// config file is optional.
pub fn resolve_db_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db_path.clone() {
        return Ok(PathBuf::from(path));
    }

    let config_path = resolve_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.database.path));
    }

    default_db_path()
}

/// Error message when the record database is missing.
pub fn missing_db_message(path: &Path) -> String {
    format!("Database not found: {}", path.display())
}

/// Print a not-found error plus hint and exit with its code.
pub fn exit_not_found_with_hint(message: &str, hint: &str) -> ! {
    CliError::not_found(message, hint).exit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_db_path_flag_wins() {
        let cli = Cli::parse_from(["keymaster", "--db-path", "/tmp/custom.db", "list"]);
        let path = resolve_db_path(&cli).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_missing_db_message_names_path() {
        let msg = missing_db_message(Path::new("/tmp/records.db"));
        assert!(msg.contains("Database not found"));
        assert!(msg.contains("/tmp/records.db"));
    }
}
