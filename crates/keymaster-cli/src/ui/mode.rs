//! Output mode selection.

/// How command results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON, nothing else on stdout
    Json,
    /// Stable `key=value` text for pipes and scripts
    #[default]
    Plain,
    /// Colors and alignment for interactive terminals
    Pretty,
}

impl OutputMode {
    /// Pick the mode: `--json` beats everything, `TERM=dumb` and non-TTY
    /// stdout both fall back to plain, and only a real terminal gets pretty.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            Self::Json
        } else if is_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
