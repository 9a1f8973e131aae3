//! Create command handler with prompt-for-missing-fields flow.

use std::io::IsTerminal;

use keymaster_core::record::{DEFAULT_ITERATION, DEFAULT_LENGTH};
use keymaster_core::{CharsetBase, RecordStore, SiteRecord};

use crate::app::AppContext;
use crate::cli::CreateArgs;
use crate::errors::CliError;
use crate::helpers::{prompt_confirm, prompt_input, prompt_optional, prompt_select, prompt_u32};
use crate::output::format_length_window;
use crate::ui::theme::{ansi, styled};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

pub fn handle_create(ctx: &AppContext, args: &CreateArgs) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let (mut store, created_db) = ctx.open_or_create_store(args.no_input)?;

    let label = match &args.label {
        Some(label) => label.clone(),
        None if interactive => prompt_input("Label", None)?,
        None => CliError::invalid_input(
            "A label is required without prompts\nHint: pass LABEL as an argument.",
        )
        .exit(),
    };

    if store.get(&label)?.is_some() {
        CliError::invalid_input(format!(
            "Record '{}' already exists\nHint: pick another label, or edit it with `keymaster update {}`.",
            label, label
        ))
        .exit();
    }

    let account = match &args.account {
        Some(account) => account.clone(),
        None if interactive => prompt_input("Account", None)?,
        None => CliError::invalid_input("--account is required without prompts").exit(),
    };

    let hostname = match &args.hostname {
        Some(hostname) => hostname.clone(),
        None if interactive => prompt_input("Hostname", None)?,
        None => CliError::invalid_input("--hostname is required without prompts").exit(),
    };

    let iteration = match args.iteration {
        Some(iteration) => iteration,
        None if interactive => prompt_u32("Iteration", DEFAULT_ITERATION)?,
        None => DEFAULT_ITERATION,
    };

    let charset_base = match args.base {
        Some(base) => match CharsetBase::from_base_number(base) {
            Ok(parsed) => parsed,
            Err(e) => CliError::invalid_input(e.to_string()).exit(),
        },
        None if interactive => {
            let options = ["32 (alphanumeric)", "64 (symbols allowed)"];
            let index = prompt_select("Charset base", &options, 0)?;
            if index == 1 {
                CharsetBase::Base64
            } else {
                CharsetBase::Base32
            }
        }
        None => CharsetBase::default(),
    };

    let use_special = match args.special {
        Some(value) => value,
        None if interactive && charset_base == CharsetBase::Base64 => {
            prompt_confirm("Allow special characters?", true)?
        }
        None => false,
    };

    let length_start = match args.length_start {
        Some(value) => value,
        None if interactive => prompt_u32("Length (start of window)", DEFAULT_LENGTH)?,
        None => DEFAULT_LENGTH,
    };

    // A start above the default pushes the default end up with it
    let default_end = length_start.max(DEFAULT_LENGTH);
    let length_end = match args.length_end {
        Some(value) => value,
        None if interactive => prompt_u32("Length (end of window)", default_end)?,
        None => default_end,
    };

    let hint_text = match &args.hint {
        Some(hint_text) => hint_text.clone(),
        None if interactive => prompt_optional("Hint (optional)", None)?.unwrap_or_default(),
        None => String::new(),
    };

    let record = SiteRecord::new(label, account, hostname)
        .with_iteration(iteration)
        .with_charset_base(charset_base)
        .with_special_chars(use_special)
        .with_length_window(length_start, length_end)
        .with_hint(hint_text);

    if let Err(e) = record.validate() {
        CliError::invalid_input(e.to_string()).exit();
    }

    store.insert(&record)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false);
        match ui_ctx.mode {
            OutputMode::Pretty => {
                if created_db {
                    print(
                        &ui_ctx,
                        &badge(
                            &ui_ctx,
                            Badge::Info,
                            &format!("Created database {}", ctx.db_path()?.display()),
                        ),
                    );
                }
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Ok, &format!("Added record '{}'", record.label)),
                );
                let context = format!(
                    "{}  \u{00B7}  {}  \u{00B7}  length {}",
                    record.hostname,
                    record.account,
                    format_length_window(&record)
                );
                println!("{}", styled(&context, ansi::DIM, ui_ctx.color));
                blank_line(&ui_ctx);
                print(
                    &ui_ctx,
                    &hint(&ui_ctx, &format!("keymaster get {}", record.label)),
                );
            }
            OutputMode::Plain | OutputMode::Json => {
                if created_db {
                    println!("db_created={}", ctx.db_path()?.display());
                }
                println!("status=ok");
                println!("label={}", record.label);
                println!("hostname={}", record.hostname);
                println!("account={}", record.account);
            }
        }
    }
    Ok(())
}
