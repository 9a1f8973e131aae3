//! Hint command handler: print the stored reminder for a record.

use keymaster_core::RecordStore;

use crate::app::{exit_not_found_with_hint, AppContext};
use crate::cli::HintArgs;
use crate::helpers::select_label;
use crate::ui::{badge, kv, print, Badge};

pub fn handle_hint(ctx: &AppContext, args: &HintArgs) -> anyhow::Result<()> {
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

    // --quiet prints the bare hint text, or nothing when none is stored.
    if ctx.quiet() {
        if !record.hint.is_empty() {
            println!("{}", record.hint);
        }
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false);
    if !ui_ctx.mode.is_pretty() {
        println!("hint={}", record.hint);
        return Ok(());
    }

    if record.hint.is_empty() {
        let note = format!("No hint stored for '{}'", record.label);
        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, &note));
    } else {
        print(&ui_ctx, &kv(&ui_ctx, "Hint", &record.hint));
    }
    Ok(())
}
