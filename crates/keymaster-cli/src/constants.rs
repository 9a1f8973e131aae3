//! Shared CLI constants.

/// Process exit codes.
///
/// 0 is success and 1 is the generic anyhow failure; 2 belongs to clap
/// (usage errors) and shells, so application codes start at 3.
pub mod exit_codes {
    /// Database or record does not exist.
    pub const NOT_FOUND: i32 = 3;

    /// Bad flag values or missing required input.
    pub const INVALID_INPUT: i32 = 4;

    /// No proto-password could be obtained.
    pub const AUTH_FAILED: i32 = 5;
}
