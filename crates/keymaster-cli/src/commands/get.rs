//! Get command handler: derive and print one password.
//!
//! The derived password goes to stdout on its own line in every non-JSON
//! mode so the command stays pipeable; decorations go before it and are
//! dropped entirely under `--quiet`.

use std::io::IsTerminal;

use keymaster_core::{derive_password, KeymasterError, RecordStore};

use crate::app::{exit_not_found_with_hint, AppContext};
use crate::cli::GetArgs;
use crate::errors::CliError;
use crate::helpers::{proto_password, select_label};
use crate::output::format_length_window;
use crate::ui::{blank_line, divider, header, kv, print, OutputMode};

pub fn handle_get(ctx: &AppContext, args: &GetArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    let label = match &args.label {
        Some(label) => label.clone(),
        None => select_label(&store.labels()?)?,
    };

    let record = match store.get(&label)? {
        Some(record) => record,
        None => exit_not_found_with_hint(
            &format!("Record '{}' not found", label),
            "Hint: Run `keymaster list` to see stored labels.",
        ),
    };

    let proto = proto_password(std::io::stdin().is_terminal())?;

    let password = match derive_password(&proto, &record) {
        Ok(password) => password,
        Err(e @ (KeymasterError::InvalidRecord(_) | KeymasterError::EmptyCharset)) => {
            CliError::invalid_input(e.to_string()).exit()
        }
        Err(e) => return Err(e.into()),
    };

    let ui_ctx = ctx.ui_context(args.json);

    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&serde_json::json!({
            "label": record.label,
            "length": password.len(),
            "password": password,
        }))?;
        println!("{}", output);
        return Ok(());
    }

    if ctx.quiet() {
        println!("{}", password);
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "get", Some(&record.label)));
            blank_line(&ui_ctx);
            print(&ui_ctx, &kv(&ui_ctx, "Account", &record.account));
            print(&ui_ctx, &kv(&ui_ctx, "Hostname", &record.hostname));
            print(&ui_ctx, &kv(&ui_ctx, "Iteration", &record.iteration.to_string()));
            let length = format!("{} (window {})", password.len(), format_length_window(&record));
            print(&ui_ctx, &kv(&ui_ctx, "Length", &length));
            blank_line(&ui_ctx);
            print(&ui_ctx, &divider(&ui_ctx));
            println!("{}", password);
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("label={}", record.label);
            println!("hostname={}", record.hostname);
            println!("account={}", record.account);
            println!("iteration={}", record.iteration);
            println!("{}", password);
        }
    }

    Ok(())
}
