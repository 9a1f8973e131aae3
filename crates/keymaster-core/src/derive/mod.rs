//! The derivation engine.
//!
//! A pure, stateless function from `(proto_password, record)` to a password
//! string. Two stages:
//!
//! 1. **Keyed mixing** ([`stream`]): canonical metadata encoding, Argon2id
//!    stretching, HKDF-SHA256 counter-block expansion into a deterministic
//!    byte stream.
//! 2. **Charset/length encoding** ([`charset`] + this module): resolve the
//!    effective character set, draw the output length from the stream, map
//!    stream bytes onto characters with rejection sampling.
//!
//! No I/O, no RNG, no clock, no retained state. Safe to call concurrently.

mod charset;
mod stream;

pub use charset::effective_charset;

use crate::error::{KeymasterError, Result};
use crate::record::SiteRecord;

use stream::KeyStream;

/// Derive the password for a record.
///
/// Identical inputs always yield the identical string; changing the
/// proto-password, account, hostname, or iteration yields an unrelated one.
/// The output length lies in `[length_start, length_end]` and every
/// character belongs to the record's effective character set.
///
/// # Arguments
///
/// * `proto_password` - The user's memorized input; never retained
/// * `record` - Validated site metadata
///
/// # Errors
///
/// Returns `KeymasterError::InvalidRecord` if the record fails validation or
/// the proto-password is empty, and `KeymasterError::EmptyCharset` if the
/// charset policy yields no characters. There are no other failure modes.
///
/// # Security
///
/// Neither the proto-password nor the output is logged, cached, or written
/// anywhere by this function; intermediate key material is zeroized on drop.
///
/// # Examples
///
/// ```
/// use keymaster_core::{derive_password, SiteRecord};
///
/// let record = SiteRecord::new("bank", "moy", "bigmoneybank.com");
/// let first = derive_password("moy1234", &record).unwrap();
/// let second = derive_password("moy1234", &record).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn derive_password(proto_password: &str, record: &SiteRecord) -> Result<String> {
    record.validate()?;

    let chars = effective_charset(record);
    if chars.is_empty() {
        return Err(KeymasterError::EmptyCharset);
    }

    let mut stream = KeyStream::new(proto_password, record)?;

    // The stream picks the length inside the window, so the same inputs
    // always choose the same length.
    let window = (record.length_end - record.length_start + 1) as usize;
    let length = record.length_start as usize + stream.uniform(window)?;

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let index = stream.uniform(chars.len())?;
        password.push(chars[index] as char);
    }

    Ok(password)
}
