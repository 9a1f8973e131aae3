//! Error types shared by record, derivation, and store code.
//!
//! Core errors stay descriptive; the CLI layer turns them into messages
//! with hints and exit codes. Display strings never contain the
//! proto-password or a derived password.

use thiserror::Error;

/// Result type alias for Keymaster operations.
pub type Result<T> = std::result::Result<T, KeymasterError>;

/// Core error type for Keymaster operations.
#[derive(Debug, Error)]
pub enum KeymasterError {
    /// A record invariant is violated (bad length window, non-positive
    /// iteration, missing required field) or the proto-password is empty
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The charset policy yields no usable characters
    #[error("Effective character set is empty")]
    EmptyCharset,

    /// A record with this label already exists in the store
    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    /// No record or database at the given label/path
    #[error("Not found: {0}")]
    NotFound(String),

    /// SQLite or filesystem failure underneath the store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Key-derivation primitive failure
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl From<std::io::Error> for KeymasterError {
    fn from(err: std::io::Error) -> Self {
        KeymasterError::Storage(err.to_string())
    }
}
