//! Typed CLI errors that carry their exit code.

use std::fmt;

use crate::constants::exit_codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    /// Missing database or record
    NotFound,
    /// No proto-password could be obtained
    AuthFailed,
    /// Bad flag values or missing required input
    InvalidInput,
}

/// A user-facing error with an optional hint line and a fixed exit code.
#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
    hint: Option<String>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n{}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    fn make(kind: ErrorKind, message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint,
        }
    }

    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::make(ErrorKind::NotFound, message, Some(hint.into()))
    }

    pub fn auth_failed(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::make(ErrorKind::AuthFailed, message, Some(hint.into()))
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::make(ErrorKind::InvalidInput, message, None)
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::NotFound => exit_codes::NOT_FOUND,
            ErrorKind::AuthFailed => exit_codes::AUTH_FAILED,
            ErrorKind::InvalidInput => exit_codes::INVALID_INPUT,
        }
    }

    /// Print to stderr and terminate with this error's exit code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
