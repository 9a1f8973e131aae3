//! Store opening with a create-on-first-use flow.

use std::io::IsTerminal;
use std::path::Path;

use keymaster_core::SqliteStore;

use super::resolver::{exit_not_found_with_hint, missing_db_message};
use crate::helpers::prompt_confirm;

/// Open an existing record database, exiting with a hint if it is missing.
pub(super) fn open_store(path: &Path) -> anyhow::Result<SqliteStore> {
    if !path.exists() {
        exit_not_found_with_hint(
            &missing_db_message(path),
            "Hint: Run `keymaster create` to add your first record (the database is created on the way).",
        );
    }
    Ok(SqliteStore::open(path)?)
}

/// Open the record database, creating it if the file does not exist.
///
/// Returns the store and whether the database was created on this call.
/// Creation is confirmed on a TTY and silent for scripted runs.
pub(super) fn open_or_create_store(
    path: &Path,
    no_input: bool,
) -> anyhow::Result<(SqliteStore, bool)> {
    if path.exists() {
        return Ok((SqliteStore::open(path)?, false));
    }

    if std::io::stdin().is_terminal() && !no_input {
        let question = format!("Database {} does not exist. Create it?", path.display());
        if !prompt_confirm(&question, true)? {
            return Err(anyhow::anyhow!("Cancelled; database not created"));
        }
    }

    Ok((SqliteStore::create(path)?, true))
}
