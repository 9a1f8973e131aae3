//! Badges and ANSI styling for pretty output.

/// Status marker printed in front of result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// ASCII form, also the fallback whenever unicode is off.
    pub fn text(&self) -> &'static str {
        match self {
            Badge::Ok => "[OK]",
            Badge::Warn => "[WARN]",
            Badge::Err => "[ERR]",
            Badge::Info => "[INFO]",
        }
    }

    /// Glyph form for terminals that render unicode.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Badge::Ok => "[\u{2713}]",   // check mark
            Badge::Warn => "[\u{26A0}]", // warning sign
            Badge::Err => "[\u{2717}]",  // ballot x
            Badge::Info => "[\u{2139}]", // information
        }
    }

    /// ANSI color paired with this badge.
    pub fn style(&self) -> &'static str {
        match self {
            Badge::Ok => ansi::GREEN,
            Badge::Warn => ansi::YELLOW,
            Badge::Err => ansi::RED,
            Badge::Info => ansi::CYAN,
        }
    }
}

/// Raw ANSI escape sequences.
pub mod ansi {
    pub const BOLD: &str = "\u{1b}[1m";
    pub const DIM: &str = "\u{1b}[2m";
    pub const RED: &str = "\u{1b}[31m";
    pub const GREEN: &str = "\u{1b}[32m";
    pub const YELLOW: &str = "\u{1b}[33m";
    pub const CYAN: &str = "\u{1b}[36m";
    pub const RESET: &str = "\u{1b}[0m";
}

/// Wrap `text` in `style` plus a reset, or pass it through when color is off.
pub fn styled(text: &str, style: &'static str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    format!("{}{}{}", style, text, ansi::RESET)
}
