//! Keymaster CLI - deterministic password derivation from non-secret metadata
//!
//! This is the command-line interface for Keymaster. It stores per-site
//! derivation metadata in a local SQLite database and recomputes passwords
//! on demand from a master proto-password that is never written anywhere.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use keymaster_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{create, delete, get, hint, list, misc, update};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);
        let message = format!("{}", e);
        print_error(&ui_ctx, &message, extract_error_hint(&message).as_deref());
        std::process::exit(1);
    }
}

/// Find a hint to print under an error message.
///
/// Errors raised through `CliError` already carry their hint inline; for
/// everything else, match the message against the failures users hit most.
fn extract_error_hint(error: &str) -> Option<String> {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            return Some(error[idx + 1..].to_string());
        }
    }

    let lower = error.to_lowercase();
    let hint = if lower.contains("record") && lower.contains("not found") {
        "Run `keymaster list` to see stored labels."
    } else if lower.contains("already exists") {
        "Pick another label, or edit the existing record with `keymaster update`."
    } else if lower.contains("database not found") {
        "Run `keymaster create` to add your first record (the database is created on the way)."
    } else if lower.contains("proto-password") {
        "Set KEYMASTER_PROTO_PASSWORD or run on a TTY to be prompted."
    } else if lower.contains("charset base") {
        "Valid bases are 32 (alphanumeric) and 64 (symbols allowed)."
    } else if lower.contains("length") && lower.contains("window") {
        "--length-start must be >= 1 and <= --length-end (both at most 256)."
    } else {
        return None;
    };

    Some(format!("Hint: {}", hint))
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Create(args)) => {
            create::handle_create(ctx, args)?;
        }
        Some(Commands::Update(args)) => {
            update::handle_update(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            list::handle_list(ctx, args)?;
        }
        Some(Commands::Hint(args)) => {
            hint::handle_hint(ctx, args)?;
        }
        Some(Commands::Get(args)) => {
            get::handle_get(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            delete::handle_delete(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Keymaster v{}", VERSION);
            println!("\nQuickstart:");
            println!("  keymaster create github --account you --hostname github.com");
            println!("  keymaster get github");
            println!("  keymaster list");
            println!("  keymaster update github --iteration 2");
            println!("\nRun `keymaster --help` for full usage.");
        }
    }

    Ok(())
}
