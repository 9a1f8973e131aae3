//! SQLite record store.
//!
//! A plain SQLite file keyed by label. Everything in it is non-secret
//! metadata, so there is no encryption-at-rest; the sensitive material
//! (proto-password, derived passwords) never reaches this layer.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};

use crate::error::{KeymasterError, Result};
use crate::record::{CharsetBase, SiteRecord};
use crate::store::traits::RecordStore;

/// Schema version written into the `meta` table on create and checked on open.
const FORMAT_VERSION: &str = "1";

/// SQLite-backed record store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    fn from_conn(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn storage_error(err: rusqlite::Error) -> KeymasterError {
        KeymasterError::Storage(format!("SQLite error: {}", err))
    }

    fn missing_label(label: &str) -> KeymasterError {
        KeymasterError::NotFound(format!("No record with label '{}'", label))
    }

    fn label_exists(conn: &Connection, label: &str) -> Result<bool> {
        conn.query_row("SELECT 1 FROM records WHERE label = ?", [label], |_| Ok(()))
            .optional()
            .map(|found| found.is_some())
            .map_err(Self::storage_error)
    }

    fn put_record(conn: &Connection, record: &SiteRecord) -> Result<()> {
        conn.execute(
            "INSERT INTO records (label, account, hostname, iteration, hint, charset_base,
                                  use_special_chars, length_start, length_end)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                record.label,
                record.account,
                record.hostname,
                record.iteration,
                record.hint,
                record.charset_base.as_base_number(),
                record.use_special_chars,
                record.length_start,
                record.length_end,
            ],
        )
        .map_err(Self::storage_error)?;
        Ok(())
    }

    fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SiteRecord> {
        let base_number: u32 = row.get("charset_base")?;
        let charset_base = CharsetBase::from_base_number(base_number).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                rusqlite::types::Type::Integer,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    e.to_string(),
                )),
            )
        })?;

        Ok(SiteRecord {
            label: row.get("label")?,
            account: row.get("account")?,
            hostname: row.get("hostname")?,
            iteration: row.get("iteration")?,
            hint: row.get("hint")?,
            charset_base,
            use_special_chars: row.get("use_special_chars")?,
            length_start: row.get("length_start")?,
            length_end: row.get("length_end")?,
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE records (
                label TEXT PRIMARY KEY,
                account TEXT NOT NULL,
                hostname TEXT NOT NULL,
                iteration INTEGER NOT NULL,
                hint TEXT NOT NULL,
                charset_base INTEGER NOT NULL,
                use_special_chars INTEGER NOT NULL,
                length_start INTEGER NOT NULL,
                length_end INTEGER NOT NULL
            );
            "#,
        )
        .map_err(Self::storage_error)?;

        conn.execute(
            "INSERT INTO meta (key, value) VALUES ('format_version', ?1), ('created_at', ?2)",
            rusqlite::params![FORMAT_VERSION, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(Self::storage_error)?;

        Ok(())
    }

    /// Create a new record database at `path`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns `KeymasterError::Storage` if the file already exists or cannot
    /// be written.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(KeymasterError::Storage(format!(
                "Record database already exists: {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(Self::storage_error)?;
        Self::init_schema(&conn)?;
        Ok(Self::from_conn(conn))
    }

    /// Open an existing record database.
    ///
    /// # Errors
    ///
    /// Returns `KeymasterError::NotFound` if the file does not exist, and
    /// `KeymasterError::Storage` if it is not a record database or carries
    /// an unknown format version.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KeymasterError::NotFound(format!(
                "Record database not found: {}",
                path.display()
            )));
        }

        let conn = Connection::open(path).map_err(Self::storage_error)?;

        let format_version: String = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .map_err(|_| {
                KeymasterError::Storage(format!(
                    "Not a keymaster record database: {}",
                    path.display()
                ))
            })?;
        if format_version != FORMAT_VERSION {
            return Err(KeymasterError::Storage(format!(
                "Unsupported record database version {} (expected {})",
                format_version, FORMAT_VERSION
            )));
        }

        Ok(Self::from_conn(conn))
    }

    /// Open a fresh in-memory store (tests, ephemeral use).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Self::storage_error)?;
        Self::init_schema(&conn)?;
        Ok(Self::from_conn(conn))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| KeymasterError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl RecordStore for SqliteStore {
    fn insert(&mut self, record: &SiteRecord) -> Result<()> {
        record.validate()?;

        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(Self::storage_error)?;

        if Self::label_exists(&tx, &record.label)? {
            return Err(KeymasterError::DuplicateLabel(record.label.clone()));
        }
        Self::put_record(&tx, record)?;

        tx.commit().map_err(Self::storage_error)
    }

    fn get(&self, label: &str) -> Result<Option<SiteRecord>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT label, account, hostname, iteration, hint, charset_base,
                    use_special_chars, length_start, length_end
             FROM records WHERE label = ?",
            [label],
            Self::record_from_row,
        )
        .optional()
        .map_err(Self::storage_error)
    }

    fn list(&self) -> Result<Vec<SiteRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT label, account, hostname, iteration, hint, charset_base,
                        use_special_chars, length_start, length_end
                 FROM records ORDER BY label",
            )
            .map_err(Self::storage_error)?;

        let records = stmt
            .query_map([], Self::record_from_row)
            .and_then(|rows| rows.collect())
            .map_err(Self::storage_error)?;
        Ok(records)
    }

    fn labels(&self) -> Result<Vec<String>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT label FROM records ORDER BY label")
            .map_err(Self::storage_error)?;

        let labels = stmt
            .query_map([], |row| row.get(0))
            .and_then(|rows| rows.collect())
            .map_err(Self::storage_error)?;
        Ok(labels)
    }

    fn replace(&mut self, label: &str, record: &SiteRecord) -> Result<()> {
        record.validate()?;

        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(Self::storage_error)?;

        if !Self::label_exists(&tx, label)? {
            return Err(Self::missing_label(label));
        }
        // Relabeling must not clobber another record.
        if record.label != label && Self::label_exists(&tx, &record.label)? {
            return Err(KeymasterError::DuplicateLabel(record.label.clone()));
        }

        tx.execute("DELETE FROM records WHERE label = ?", [label])
            .map_err(Self::storage_error)?;
        Self::put_record(&tx, record)?;

        tx.commit().map_err(Self::storage_error)
    }

    fn delete(&mut self, label: &str) -> Result<()> {
        let conn = self.lock()?;
        let deleted = conn
            .execute("DELETE FROM records WHERE label = ?", [label])
            .map_err(Self::storage_error)?;
        if deleted == 0 {
            return Err(Self::missing_label(label));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: &str) -> SiteRecord {
        SiteRecord::new(label, "moy", "bigmoneybank.com")
            .with_charset_base(CharsetBase::Base64)
            .with_special_chars(true)
            .with_hint("the usual one")
    }

    #[test]
    fn test_insert_get_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let record = sample("bank");

        store.insert(&record).unwrap();
        let loaded = store.get("bank").unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert(&sample("bank")).unwrap();

        let result = store.insert(&sample("bank"));
        assert!(matches!(result, Err(KeymasterError::DuplicateLabel(label)) if label == "bank"));
    }

    #[test]
    fn test_invalid_record_rejected_on_insert() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let bad = SiteRecord::new("bank", "", "host");
        assert!(matches!(
            store.insert(&bad),
            Err(KeymasterError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_list_ordered_by_label() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert(&sample("zoo")).unwrap();
        store.insert(&sample("bank")).unwrap();
        store.insert(&sample("mail")).unwrap();

        let labels: Vec<String> = store.list().unwrap().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["bank", "mail", "zoo"]);
        assert_eq!(store.labels().unwrap(), labels);
    }

    #[test]
    fn test_replace_updates_fields() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert(&sample("bank")).unwrap();

        let rotated = sample("bank").with_iteration(2);
        store.replace("bank", &rotated).unwrap();

        assert_eq!(store.get("bank").unwrap().unwrap().iteration, 2);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_replace_can_relabel() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert(&sample("bank")).unwrap();

        let renamed = sample("savings");
        store.replace("bank", &renamed).unwrap();

        assert!(store.get("bank").unwrap().is_none());
        assert_eq!(store.get("savings").unwrap().unwrap(), renamed);
    }

    #[test]
    fn test_replace_missing_label_fails() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let result = store.replace("bank", &sample("bank"));
        assert!(matches!(result, Err(KeymasterError::NotFound(_))));
    }

    #[test]
    fn test_relabel_collision_rejected() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert(&sample("bank")).unwrap();
        store.insert(&sample("savings")).unwrap();

        let result = store.replace("bank", &sample("savings"));
        assert!(matches!(result, Err(KeymasterError::DuplicateLabel(_))));

        // Both originals are untouched.
        assert!(store.get("bank").unwrap().is_some());
        assert!(store.get("savings").unwrap().is_some());
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.insert(&sample("bank")).unwrap();

        store.delete("bank").unwrap();
        assert!(store.get("bank").unwrap().is_none());

        let result = store.delete("bank");
        assert!(matches!(result, Err(KeymasterError::NotFound(_))));
    }
}
