//! Delete command handler.

use std::io::IsTerminal;

use keymaster_core::{KeymasterError, RecordStore};

use crate::app::{exit_not_found_with_hint, AppContext};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_confirm, select_label};
use crate::ui::{badge, print, Badge, OutputMode};

fn unknown_label_exit(label: &str) -> ! {
    exit_not_found_with_hint(
        &format!("Record '{}' not found", label),
        "Hint: Run `keymaster list` to see stored labels.",
    )
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    let label = match &args.label {
        Some(label) => label.clone(),
        None => select_label(&store.labels()?)?,
    };

    if store.get(&label)?.is_none() {
        unknown_label_exit(&label);
    }

    // Deleting a record loses the metadata its password is derived from,
    // so off-TTY callers must pass --yes.
    if !args.yes {
        if !std::io::stdin().is_terminal() {
            CliError::invalid_input(
                "Confirmation required when stdin is not a TTY\nHint: pass --yes to delete without prompting.",
            )
            .exit();
        }

        let question = format!(
            "Delete record '{}'? Its password cannot be derived without it.",
            label
        );
        if !prompt_confirm(&question, false)? {
            report(ctx, Badge::Info, "Cancelled", &[("status", "cancelled")]);
            return Ok(());
        }
    }

    match store.delete(&label) {
        Ok(()) => {}
        Err(KeymasterError::NotFound(_)) => unknown_label_exit(&label),
        Err(e) => return Err(e.into()),
    }

    report(
        ctx,
        Badge::Ok,
        &format!("Deleted record '{}'", label),
        &[("status", "ok"), ("deleted", &label)],
    );
    Ok(())
}

/// Print the outcome in the active output mode, honoring --quiet.
fn report(ctx: &AppContext, kind: Badge, pretty_text: &str, plain_pairs: &[(&str, &str)]) {
    if ctx.quiet() {
        return;
    }
    let ui_ctx = ctx.ui_context(false);
    match ui_ctx.mode {
        OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, kind, pretty_text)),
        OutputMode::Plain | OutputMode::Json => {
            for (key, value) in plain_pairs {
                println!("{}={}", key, value);
            }
        }
    }
}
