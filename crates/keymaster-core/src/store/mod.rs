//! Record store: label-keyed persistence for site metadata.
//!
//! The store holds only non-secret metadata; derivation never touches it.
//! A [`RecordStore`] trait keeps the engine and CLI independent of the
//! backing database; [`SqliteStore`] is the shipped implementation.

mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::RecordStore;
