//! Update command handler; prompts are pre-filled with current values.

use std::io::IsTerminal;

use keymaster_core::{CharsetBase, KeymasterError, RecordStore};

use crate::app::{exit_not_found_with_hint, AppContext};
use crate::cli::UpdateArgs;
use crate::errors::CliError;
use crate::helpers::{
    prompt_confirm, prompt_input, prompt_optional, prompt_select, prompt_u32, select_label,
};
use crate::ui::theme::{ansi, styled};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let interactive = std::io::stdin().is_terminal() && !args.no_input;

    let label = match &args.label {
        Some(label) => label.clone(),
        None if interactive => select_label(&store.labels()?)?,
        None => CliError::invalid_input(
            "A label is required without prompts\nHint: pass LABEL as an argument.",
        )
        .exit(),
    };

    let current = match store.get(&label)? {
        Some(record) => record,
        None => exit_not_found_with_hint(
            &format!("Record '{}' not found", label),
            "Hint: Run `keymaster list` to see stored labels.",
        ),
    };

    let has_field_flags = args.relabel.is_some()
        || args.account.is_some()
        || args.hostname.is_some()
        || args.iteration.is_some()
        || args.base.is_some()
        || args.special.is_some()
        || args.length_start.is_some()
        || args.length_end.is_some()
        || args.hint.is_some();

    let updated = if has_field_flags {
        let mut updated = current.clone();
        if let Some(new_label) = &args.relabel {
            updated.label = new_label.clone();
        }
        if let Some(account) = &args.account {
            updated.account = account.clone();
        }
        if let Some(hostname) = &args.hostname {
            updated.hostname = hostname.clone();
        }
        if let Some(iteration) = args.iteration {
            updated.iteration = iteration;
        }
        if let Some(base) = args.base {
            updated.charset_base = match CharsetBase::from_base_number(base) {
                Ok(parsed) => parsed,
                Err(e) => CliError::invalid_input(e.to_string()).exit(),
            };
        }
        if let Some(special) = args.special {
            updated.use_special_chars = special;
        }
        if let Some(start) = args.length_start {
            updated.length_start = start;
        }
        if let Some(end) = args.length_end {
            updated.length_end = end;
        }
        if let Some(hint_text) = &args.hint {
            // --hint "" clears a stored hint
            updated.hint = hint_text.clone();
        }
        updated
    } else if interactive {
        let mut updated = current.clone();
        updated.label = prompt_input("Label", Some(&current.label))?;
        updated.account = prompt_input("Account", Some(&current.account))?;
        updated.hostname = prompt_input("Hostname", Some(&current.hostname))?;
        updated.iteration = prompt_u32("Iteration", current.iteration)?;

        let options = ["32 (alphanumeric)", "64 (symbols allowed)"];
        let default_index = if current.charset_base == CharsetBase::Base64 {
            1
        } else {
            0
        };
        let index = prompt_select("Charset base", &options, default_index)?;
        updated.charset_base = if index == 1 {
            CharsetBase::Base64
        } else {
            CharsetBase::Base32
        };
        updated.use_special_chars = if updated.charset_base == CharsetBase::Base64 {
            prompt_confirm("Allow special characters?", current.use_special_chars)?
        } else {
            false
        };

        updated.length_start = prompt_u32("Length (start of window)", current.length_start)?;
        updated.length_end = prompt_u32(
            "Length (end of window)",
            current.length_end.max(updated.length_start),
        )?;

        let hint_default = if current.hint.is_empty() {
            None
        } else {
            Some(current.hint.as_str())
        };
        updated.hint = prompt_optional("Hint (optional)", hint_default)?.unwrap_or_default();
        updated
    } else {
        CliError::invalid_input(
            "Nothing to update\nHint: pass field flags such as --account, --iteration, or --relabel.",
        )
        .exit()
    };

    if let Err(e) = updated.validate() {
        CliError::invalid_input(e.to_string()).exit();
    }

    if updated == current {
        if !ctx.quiet() {
            let ui_ctx = ctx.ui_context(false);
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Nothing changed"));
                }
                OutputMode::Plain | OutputMode::Json => {
                    println!("status=unchanged");
                }
            }
        }
        return Ok(());
    }

    match store.replace(&label, &updated) {
        Ok(()) => {}
        Err(KeymasterError::DuplicateLabel(other)) => {
            CliError::invalid_input(format!("Record '{}' already exists", other)).exit();
        }
        Err(e) => return Err(e.into()),
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Ok, &format!("Updated record '{}'", updated.label)),
                );
                let mut context = format!(
                    "{}  \u{00B7}  {}  \u{00B7}  iteration {}",
                    updated.hostname, updated.account, updated.iteration
                );
                if updated.label != label {
                    context.push_str(&format!("  \u{00B7}  was '{}'", label));
                }
                println!("{}", styled(&context, ansi::DIM, ui_ctx.color));
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, &format!("keymaster get {}", updated.label)),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("label={}", updated.label);
                if updated.label != label {
                    println!("previous_label={}", label);
                }
                println!("iteration={}", updated.iteration);
            }
        }
    }
    Ok(())
}
