//! Rendering primitives: headers, badges, key-value lines, tables.
//!
//! Every function renders for the mode carried by the [`UiContext`]: pretty
//! output gets color and unicode, plain output gets stable `key=value` text
//! for scripts, and JSON mode renders nothing here at all (handlers emit
//! their own JSON documents).

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{ansi, styled, Badge};

/// Longest divider the pretty mode will draw, regardless of terminal width.
const DIVIDER_MAX: usize = 60;

/// Command header line.
///
/// `"Keymaster · get (github)"` in pretty mode, `"keymaster get"` in plain.
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Json => String::new(),
        OutputMode::Plain => format!("keymaster {}", command),
        OutputMode::Pretty => {
            let title = styled("Keymaster", ansi::BOLD, ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
    }
}

/// Horizontal rule sized to the terminal.
pub fn divider(ctx: &UiContext) -> String {
    if !ctx.mode.is_pretty() {
        return "---".to_string();
    }
    "\u{2500}".repeat(ctx.width.min(DIVIDER_MAX))
}

/// Status badge with an optional trailing message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let glyph = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        glyph
    } else {
        format!("{} {}", glyph, message)
    }
}

/// One key-value line.
///
/// `"Hostname: github.com"` with a dim key in pretty mode; plain mode
/// folds the key to `hostname=github.com` so scripts can split on `=`.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("{}={}", key.to_lowercase().replace(' ', "_"), value);
    }
    format!(
        "{} {}",
        styled(&format!("{}:", key), ansi::DIM, ctx.color),
        value
    )
}

/// Suggestion line pointing at a follow-up command.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("hint={}", text);
    }
    format!("{} {}", styled("Hint:", ansi::DIM, ctx.color), text)
}

/// Borderless table for record lists.
///
/// Pretty mode aligns the columns under dim headers; plain mode drops the
/// headers and emits one space-joined line per row.
pub fn simple_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        let lines: Vec<String> = rows.iter().map(|row| row.join(" ")).collect();
        return lines.join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Header styling goes through comfy-table cells so the dim escape codes
    // do not distort the computed column widths.
    table.set_header(headers.iter().map(|h| {
        let cell = Cell::new(h);
        if ctx.color {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    }));

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Print to stdout unless the context is in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Spacer line, pretty mode only.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Error text with an optional hint line below it.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut out = if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    };
    if let Some(h) = error_hint {
        out.push('\n');
        out.push_str(&if ctx.mode.is_pretty() {
            hint(ctx, h)
        } else {
            format!("hint={}", h)
        });
    }
    out
}

/// Print an error (and hint, when present) to stderr.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}
