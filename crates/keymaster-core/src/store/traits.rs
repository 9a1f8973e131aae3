//! Record store trait definition.
//!
//! The `RecordStore` trait defines the interface the CLI (and tests) use to
//! keep site records. The backing data is plaintext by design: every field
//! is non-secret, and the derived passwords are recomputed, never stored.

use crate::error::Result;
use crate::record::SiteRecord;

/// Label-keyed storage for site records.
///
/// Implementations must enforce label uniqueness and validate records before
/// writing; the engine itself never talks to a store.
pub trait RecordStore: Send + Sync {
    /// Insert a new record.
    ///
    /// Fails with `KeymasterError::DuplicateLabel` when the label is taken
    /// and `KeymasterError::InvalidRecord` when validation rejects it.
    fn insert(&mut self, record: &SiteRecord) -> Result<()>;

    /// Look up a record; `Ok(None)` when the label is absent.
    fn get(&self, label: &str) -> Result<Option<SiteRecord>>;

    /// All records, ordered by label.
    fn list(&self) -> Result<Vec<SiteRecord>>;

    /// All labels, ordered.
    fn labels(&self) -> Result<Vec<String>>;

    /// Replace the record stored under `label` with `record`, atomically.
    ///
    /// The new record may carry a different label; relabeling is safe
    /// because labels are not part of the derived key material. Fails with
    /// `KeymasterError::NotFound` when `label` is absent and
    /// `KeymasterError::DuplicateLabel` when the new label belongs to a
    /// different record.
    fn replace(&mut self, label: &str, record: &SiteRecord) -> Result<()>;

    /// Delete by label; `KeymasterError::NotFound` when it is absent.
    fn delete(&mut self, label: &str) -> Result<()>;
}
