//! Site metadata records.
//!
//! A [`SiteRecord`] holds everything needed to re-derive one site's password
//! except the proto-password itself: account, hostname, rotation counter,
//! charset policy, and length window. None of it is secret; the store keeps
//! these in plaintext by design.

use serde::{Deserialize, Serialize};

use crate::error::{KeymasterError, Result};

/// Default rotation counter for new records.
pub const DEFAULT_ITERATION: u32 = 1;

/// Default password length window (a single length).
pub const DEFAULT_LENGTH: u32 = 16;

/// Upper bound on `length_end`; windows beyond this are rejected as
/// configuration mistakes.
pub const MAX_LENGTH: u32 = 256;

/// Nominal character-set policy for a site.
///
/// The names come from the column values the record store uses (32/64); they
/// select between an alphanumeric-only output and one that may also contain
/// symbols. `use_special_chars` on the record can still force the
/// alphanumeric subset for a Base64 site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetBase {
    /// Alphanumeric output only
    Base32,
    /// Alphanumeric plus symbols (when `use_special_chars` is set)
    Base64,
}

impl CharsetBase {
    /// The integer the store persists for this policy.
    pub fn as_base_number(&self) -> u32 {
        match self {
            Self::Base32 => 32,
            Self::Base64 => 64,
        }
    }

    /// Parse a persisted base number.
    ///
    /// # Errors
    ///
    /// Returns `KeymasterError::InvalidRecord` for anything other than 32 or 64.
    pub fn from_base_number(base: u32) -> Result<Self> {
        match base {
            32 => Ok(Self::Base32),
            64 => Ok(Self::Base64),
            other => Err(KeymasterError::InvalidRecord(format!(
                "charset base must be 32 or 64, got {}",
                other
            ))),
        }
    }
}

impl Default for CharsetBase {
    fn default() -> Self {
        Self::Base32
    }
}

/// Non-secret metadata for one site's password.
///
/// Only `account`, `hostname`, and `iteration` participate in the derived
/// key; `label` and `hint` are lookup/display concerns, so relabeling a
/// record never changes its password. The charset and length fields shape
/// the output encoding without adding key material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    /// Unique mnemonic used to look the record up in the store
    pub label: String,

    /// Username or other account mnemonic at the site
    pub account: String,

    /// Site/service identifier
    pub hostname: String,

    /// Rotation counter; incrementing it rotates the password
    pub iteration: u32,

    /// Free-text reminder; never used in derivation
    pub hint: String,

    /// Nominal charset policy
    pub charset_base: CharsetBase,

    /// When false, forces alphanumeric output even for Base64 sites
    pub use_special_chars: bool,

    /// Inclusive lower bound of the output-length window
    pub length_start: u32,

    /// Inclusive upper bound of the output-length window
    pub length_end: u32,
}

impl SiteRecord {
    /// Create a record with default policy: iteration 1, Base32,
    /// no specials, fixed length 16.
    pub fn new(
        label: impl Into<String>,
        account: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            account: account.into(),
            hostname: hostname.into(),
            iteration: DEFAULT_ITERATION,
            hint: String::new(),
            charset_base: CharsetBase::default(),
            use_special_chars: false,
            length_start: DEFAULT_LENGTH,
            length_end: DEFAULT_LENGTH,
        }
    }

    pub fn with_iteration(mut self, iteration: u32) -> Self {
        self.iteration = iteration;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_charset_base(mut self, base: CharsetBase) -> Self {
        self.charset_base = base;
        self
    }

    pub fn with_special_chars(mut self, use_special_chars: bool) -> Self {
        self.use_special_chars = use_special_chars;
        self
    }

    pub fn with_length_window(mut self, start: u32, end: u32) -> Self {
        self.length_start = start;
        self.length_end = end;
        self
    }

    /// Check every record invariant.
    ///
    /// Called before any derivation attempt and before any store write.
    ///
    /// # Errors
    ///
    /// Returns `KeymasterError::InvalidRecord` naming the violated invariant:
    /// empty required field, `iteration < 1`, or a bad length window.
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(KeymasterError::InvalidRecord(
                "label cannot be empty".to_string(),
            ));
        }
        if self.account.is_empty() {
            return Err(KeymasterError::InvalidRecord(
                "account cannot be empty".to_string(),
            ));
        }
        if self.hostname.is_empty() {
            return Err(KeymasterError::InvalidRecord(
                "hostname cannot be empty".to_string(),
            ));
        }
        if self.iteration < 1 {
            return Err(KeymasterError::InvalidRecord(
                "iteration must be at least 1".to_string(),
            ));
        }
        if self.length_start < 1 {
            return Err(KeymasterError::InvalidRecord(
                "length window must start at 1 or above".to_string(),
            ));
        }
        if self.length_start > self.length_end {
            return Err(KeymasterError::InvalidRecord(format!(
                "length window start {} exceeds end {}",
                self.length_start, self.length_end
            )));
        }
        if self.length_end > MAX_LENGTH {
            return Err(KeymasterError::InvalidRecord(format!(
                "length window end {} exceeds maximum {}",
                self.length_end, MAX_LENGTH
            )));
        }
        Ok(())
    }
}
