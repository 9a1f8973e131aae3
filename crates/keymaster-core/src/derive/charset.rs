//! Effective character set resolution.
//!
//! The output alphabet is built from fixed pools. Base32 sites get the
//! 62-character alphanumeric set; Base64 sites additionally get a fixed
//! symbol set when `use_special_chars` is set, and fall back to the
//! alphanumeric subset otherwise (for sites that reject symbols).

use crate::record::{CharsetBase, SiteRecord};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// Symbols allowed for Base64 sites with `use_special_chars` set.
/// Restricted to characters most password forms accept.
const SPECIALS: &[u8] = b"!@#$%^&*()-_=+";

/// Build the effective character set for a record.
///
/// The returned pool contains each character exactly once; selection
/// uniformity is the sampler's job, not the pool's.
pub fn effective_charset(record: &SiteRecord) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(UPPERCASE.len() + LOWERCASE.len() + DIGITS.len());
    chars.extend_from_slice(UPPERCASE);
    chars.extend_from_slice(LOWERCASE);
    chars.extend_from_slice(DIGITS);

    if record.charset_base == CharsetBase::Base64 && record.use_special_chars {
        chars.extend_from_slice(SPECIALS);
    }

    chars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SiteRecord;

    #[test]
    fn test_base32_is_alphanumeric_only() {
        let record = SiteRecord::new("a", "b", "c");
        let set = effective_charset(&record);
        assert_eq!(set.len(), 62);
        assert!(set.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_base64_without_specials_is_alphanumeric_only() {
        let record = SiteRecord::new("a", "b", "c")
            .with_charset_base(CharsetBase::Base64)
            .with_special_chars(false);
        let set = effective_charset(&record);
        assert_eq!(set.len(), 62);
        assert!(set.iter().all(|b| b.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_base64_with_specials_adds_symbols() {
        let record = SiteRecord::new("a", "b", "c")
            .with_charset_base(CharsetBase::Base64)
            .with_special_chars(true);
        let set = effective_charset(&record);
        assert_eq!(set.len(), 62 + SPECIALS.len());
        assert!(SPECIALS.iter().all(|s| set.contains(s)));
    }

    #[test]
    fn test_base32_ignores_special_flag() {
        // Base32 is alphanumeric by definition; the flag cannot widen it.
        let record = SiteRecord::new("a", "b", "c").with_special_chars(true);
        let set = effective_charset(&record);
        assert_eq!(set.len(), 62);
    }

    #[test]
    fn test_no_duplicate_characters() {
        let record = SiteRecord::new("a", "b", "c")
            .with_charset_base(CharsetBase::Base64)
            .with_special_chars(true);
        let mut set = effective_charset(&record);
        let len = set.len();
        set.sort_unstable();
        set.dedup();
        assert_eq!(set.len(), len);
    }
}
