//! Per-invocation application context.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use keymaster_core::SqliteStore;

use crate::cli::Cli;
use crate::ui::UiContext;

use super::resolver::resolve_db_path;
use super::store;

/// Bundles the parsed CLI with the lazily-resolved database path so
/// handlers take one context argument instead of several.
pub struct AppContext<'a> {
    cli: &'a Cli,
    db_path: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            db_path: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Database path, resolved on first use and cached after.
    pub fn db_path(&self) -> anyhow::Result<&Path> {
        self.db_path
            .get_or_try_init(|| resolve_db_path(self.cli))
            .map(|p| p.as_path())
    }

    /// Build a render context from the global presentation flags.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color, self.cli.ascii)
    }

    /// Open the record store, exiting with a hint if the database is missing.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        store::open_store(self.db_path()?)
    }

    /// Open the record store, creating the database if it does not exist.
    ///
    /// Returns the store and whether the database was created on this call.
    /// On a TTY the user is asked before creating; `--no-input` and
    /// non-interactive runs create silently.
    pub fn open_or_create_store(&self, no_input: bool) -> anyhow::Result<(SqliteStore, bool)> {
        store::open_or_create_store(self.db_path()?, no_input)
    }
}
