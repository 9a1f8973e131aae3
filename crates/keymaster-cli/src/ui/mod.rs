//! Terminal output for the Keymaster CLI.
//!
//! Split into four small pieces: [`context`] detects the environment (TTY,
//! width, color, unicode), [`mode`] resolves which of the three output modes
//! applies, [`theme`] holds badges and ANSI styling, and [`render`] turns
//! both into printable text.
//!
//! Handlers build a [`UiContext`] once and pass it to every render call:
//!
//! ```ignore
//! let ui_ctx = ctx.ui_context(args.json);
//! print(&ui_ctx, &header(&ui_ctx, "list", None));
//! print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
//! ```

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use self::{context::UiContext, mode::OutputMode, theme::Badge};

pub use render::{badge, blank_line, divider, header, hint, kv, print, print_error, simple_table};
