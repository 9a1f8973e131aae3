//! Keyed mixing: proto-password + metadata -> deterministic byte stream.
//!
//! Stage 1 of the derivation. The key-relevant record fields are packed into
//! a canonical length-prefixed encoding, the proto-password is stretched with
//! Argon2id (memory-hard, resistant to GPU-based attacks) over a salt bound
//! to that encoding, and the resulting key is expanded into an unbounded
//! pseudorandom stream with HKDF-SHA256, one counter-indexed block at a time.
//!
//! The stream is exactly reproducible from `(proto_password, account,
//! hostname, iteration)` and nothing else.

use argon2::Argon2;
use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use crate::error::{KeymasterError, Result};
use crate::record::SiteRecord;

/// Argon2id parameters.
///
/// These values balance security and usability:
/// - Memory: 64 MB (64 * 1024 KB)
/// - Iterations: 3
/// - Parallelism: 1 (single-threaded for simplicity)
const ARGON2_MEMORY_KB: u32 = 64 * 1024;
const ARGON2_ITERATIONS: u32 = 3;
const ARGON2_PARALLELISM: u32 = 1;

/// Length of the stretched key and of each expanded block, in bytes.
const KEY_LENGTH: usize = 32;

/// Version tag mixed into the canonical key encoding. Bumping it re-keys
/// every derived password, so it only changes with the algorithm itself.
const KEY_ENCODING_TAG: &[u8] = b"keymaster.v1";

/// Domain-separation tag for stream expansion.
const STREAM_INFO_TAG: &[u8] = b"keymaster.v1.stream";

/// Canonical byte encoding of the key-relevant record fields.
///
/// Each variable-length field carries an 8-byte big-endian length prefix, so
/// no choice of account/hostname contents can collide with another split of
/// the same bytes. `label` and `hint` are deliberately absent: they are
/// lookup/display fields and must not affect the derived password.
fn canonical_key_encoding(record: &SiteRecord) -> Vec<u8> {
    let account = record.account.as_bytes();
    let hostname = record.hostname.as_bytes();

    let mut encoded =
        Vec::with_capacity(KEY_ENCODING_TAG.len() + account.len() + hostname.len() + 20);
    encoded.extend_from_slice(KEY_ENCODING_TAG);
    encoded.extend_from_slice(&(account.len() as u64).to_be_bytes());
    encoded.extend_from_slice(account);
    encoded.extend_from_slice(&(hostname.len() as u64).to_be_bytes());
    encoded.extend_from_slice(hostname);
    encoded.extend_from_slice(&record.iteration.to_be_bytes());
    encoded
}

/// Deterministic pseudorandom byte stream keyed by proto-password + metadata.
///
/// Key material is zeroized from memory when the stream is dropped.
#[derive(ZeroizeOnDrop)]
pub(crate) struct KeyStream {
    /// Stretched key the stream blocks are expanded from (zeroized on drop)
    prk: [u8; KEY_LENGTH],
    /// Current expanded block (zeroized on drop)
    block: [u8; KEY_LENGTH],
    /// Index of the next block to expand
    counter: u32,
    /// Bytes of `block` already handed out
    used: usize,
}

impl KeyStream {
    /// Stretch the proto-password over the record's canonical encoding and
    /// position the stream at its first byte.
    ///
    /// # Errors
    ///
    /// Returns `KeymasterError::InvalidRecord` for an empty proto-password
    /// and `KeymasterError::Crypto` if the KDF rejects its parameters.
    pub fn new(proto_password: &str, record: &SiteRecord) -> Result<Self> {
        if proto_password.is_empty() {
            return Err(KeymasterError::InvalidRecord(
                "proto-password cannot be empty".to_string(),
            ));
        }

        // The salt binds the stretched key to the metadata, so changing any
        // key field re-keys the whole stream.
        let salt: [u8; KEY_LENGTH] = Sha256::digest(canonical_key_encoding(record)).into();

        let params = argon2::Params::new(
            ARGON2_MEMORY_KB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            Some(KEY_LENGTH),
        )
        .map_err(|e| KeymasterError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;

        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

        let mut prk = [0u8; KEY_LENGTH];
        argon2
            .hash_password_into(proto_password.as_bytes(), &salt, &mut prk)
            .map_err(|e| KeymasterError::Crypto(format!("Key stretching failed: {}", e)))?;

        Ok(Self {
            prk,
            block: [0u8; KEY_LENGTH],
            counter: 0,
            used: KEY_LENGTH,
        })
    }

    /// Expand the next counter-indexed block from the stretched key.
    fn refill(&mut self) -> Result<()> {
        let mut info = [0u8; STREAM_INFO_TAG.len() + 4];
        info[..STREAM_INFO_TAG.len()].copy_from_slice(STREAM_INFO_TAG);
        info[STREAM_INFO_TAG.len()..].copy_from_slice(&self.counter.to_be_bytes());

        let hkdf = Hkdf::<Sha256>::from_prk(&self.prk)
            .map_err(|e| KeymasterError::Crypto(format!("Stream expansion failed: {}", e)))?;
        hkdf.expand(&info, &mut self.block)
            .map_err(|e| KeymasterError::Crypto(format!("Stream expansion failed: {}", e)))?;

        self.counter += 1;
        self.used = 0;
        Ok(())
    }

    /// Next stream byte.
    pub fn next_byte(&mut self) -> Result<u8> {
        if self.used == KEY_LENGTH {
            self.refill()?;
        }
        let byte = self.block[self.used];
        self.used += 1;
        Ok(byte)
    }

    /// Uniform sample in `[0, bound)` via rejection sampling.
    ///
    /// A stream byte is accepted only if it falls below the largest multiple
    /// of `bound` that fits in 256, then reduced modulo `bound`. This is
    /// bias-free for every `bound` in `1..=256` and deterministic given the
    /// same stream position.
    pub fn uniform(&mut self, bound: usize) -> Result<usize> {
        debug_assert!(bound >= 1 && bound <= 256);
        let zone = 256 - (256 % bound);
        loop {
            let byte = self.next_byte()? as usize;
            if byte < zone {
                return Ok(byte % bound);
            }
        }
    }
}

impl std::fmt::Debug for KeyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStream")
            .field("prk", &"[REDACTED]")
            .field("block", &"[REDACTED]")
            .field("counter", &self.counter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SiteRecord;

    fn record() -> SiteRecord {
        SiteRecord::new("bank", "moy", "bigmoneybank.com")
    }

    fn take(stream: &mut KeyStream, n: usize) -> Vec<u8> {
        (0..n).map(|_| stream.next_byte().unwrap()).collect()
    }

    #[test]
    fn test_stream_deterministic() {
        let mut a = KeyStream::new("moy1234", &record()).unwrap();
        let mut b = KeyStream::new("moy1234", &record()).unwrap();

        // Cross a block boundary to cover counter-indexed refills too.
        assert_eq!(take(&mut a, 100), take(&mut b, 100));
    }

    #[test]
    fn test_stream_depends_on_proto_password() {
        let mut a = KeyStream::new("moy1234", &record()).unwrap();
        let mut b = KeyStream::new("moy1235", &record()).unwrap();
        assert_ne!(take(&mut a, 32), take(&mut b, 32));
    }

    #[test]
    fn test_stream_depends_on_each_key_field() {
        let base = take(&mut KeyStream::new("moy1234", &record()).unwrap(), 32);

        let other_account = SiteRecord {
            account: "moyra".to_string(),
            ..record()
        };
        assert_ne!(
            base,
            take(&mut KeyStream::new("moy1234", &other_account).unwrap(), 32)
        );

        let other_hostname = SiteRecord {
            hostname: "bigmoneybank.org".to_string(),
            ..record()
        };
        assert_ne!(
            base,
            take(&mut KeyStream::new("moy1234", &other_hostname).unwrap(), 32)
        );

        let rotated = record().with_iteration(2);
        assert_ne!(base, take(&mut KeyStream::new("moy1234", &rotated).unwrap(), 32));
    }

    #[test]
    fn test_stream_ignores_label_and_hint() {
        let base = take(&mut KeyStream::new("moy1234", &record()).unwrap(), 32);

        let relabeled = SiteRecord {
            label: "savings".to_string(),
            ..record()
        }
        .with_hint("the usual one");
        assert_eq!(base, take(&mut KeyStream::new("moy1234", &relabeled).unwrap(), 32));
    }

    #[test]
    fn test_canonical_encoding_is_unambiguous() {
        // "ab" + "c" must not collide with "a" + "bc".
        let split_one = SiteRecord::new("x", "ab", "c");
        let split_two = SiteRecord::new("x", "a", "bc");
        assert_ne!(
            canonical_key_encoding(&split_one),
            canonical_key_encoding(&split_two)
        );
    }

    #[test]
    fn test_empty_proto_password_rejected() {
        let result = KeyStream::new("", &record());
        assert!(matches!(result, Err(KeymasterError::InvalidRecord(_))));
    }

    #[test]
    fn test_uniform_respects_bound() {
        let mut stream = KeyStream::new("moy1234", &record()).unwrap();
        for _ in 0..200 {
            let sample = stream.uniform(62).unwrap();
            assert!(sample < 62);
        }
    }

    #[test]
    fn test_uniform_full_byte_bound() {
        // bound = 256 accepts every byte unchanged.
        let mut a = KeyStream::new("moy1234", &record()).unwrap();
        let mut b = KeyStream::new("moy1234", &record()).unwrap();
        for _ in 0..40 {
            assert_eq!(a.uniform(256).unwrap(), b.next_byte().unwrap() as usize);
        }
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let stream = KeyStream::new("moy1234", &record()).unwrap();
        let debug_output = format!("{:?}", stream);
        assert!(debug_output.contains("REDACTED"));

        let prk_hex = hex::encode(&stream.prk[..4]);
        assert!(!debug_output.contains(&prk_hex));
    }
}
