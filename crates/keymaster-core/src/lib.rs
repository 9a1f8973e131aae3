//! # Keymaster Core
//!
//! Core library for Keymaster - a deterministic password-derivation tool.
//!
//! Keymaster never stores passwords. It stores non-secret metadata per site
//! (account, hostname, rotation counter, charset policy, length window) and
//! recomputes each password on demand from that metadata plus a user-supplied
//! proto-password. Identical inputs always produce the identical password;
//! changing any key field (or the rotation counter) produces an unrelated one.
//!
//! ## Layout
//!
//! - **record**: Site metadata records and their validation
//! - **derive**: The derivation engine (keyed mixing + charset encoding)
//! - **store**: Record store trait and SQLite implementation
//!
//! The derivation engine is a pure function with no I/O; the store holds only
//! non-secret metadata. Neither the proto-password nor any derived password
//! ever touches the store, the logs, or the error messages.

pub mod derive;
pub mod error;
pub mod record;
pub mod store;

pub use derive::derive_password;
pub use error::{KeymasterError, Result};
pub use record::{CharsetBase, SiteRecord};
pub use store::{RecordStore, SqliteStore};

/// Crate version, also reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
