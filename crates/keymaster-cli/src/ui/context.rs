//! Environment detection for terminal output.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Everything a render call needs to know about the terminal.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// ANSI color enabled
    pub color: bool,
    /// Unicode symbols enabled (false forces ASCII fallbacks)
    pub unicode: bool,
    /// Terminal width in columns
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Build a context from the environment plus the `--json`, `--no-color`
    /// and `--ascii` flags.
    pub fn from_env(json_flag: bool, no_color_flag: bool, ascii_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = matches!(std::env::var("TERM"), Ok(v) if v == "dumb");

        Self {
            // NO_COLOR, --no-color and TERM=dumb each disable color on their own.
            color: is_tty
                && !no_color_flag
                && std::env::var("NO_COLOR").is_err()
                && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, is_tty, term_is_dumb),
        }
    }
}

/// Detected terminal width, if any.
fn terminal_width() -> Option<usize> {
    // COLUMNS wins when set, which also gives tests a deterministic override.
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|w| *w > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ writes a winsize struct; we only read it on success.
        let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if rc == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_wins() {
        let ctx = UiContext::from_env(true, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_flag_disables_unicode() {
        assert!(!UiContext::from_env(false, false, true).unicode);
        assert!(UiContext::from_env(false, false, false).unicode);
    }

    #[test]
    fn test_no_color_flag_disables_color() {
        assert!(!UiContext::from_env(false, true, false).color);
    }

    #[test]
    fn test_width_never_zero() {
        assert!(UiContext::from_env(false, false, false).width > 0);
    }
}
