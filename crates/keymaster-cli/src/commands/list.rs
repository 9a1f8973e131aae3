//! List command handler: record table or single-record details.

use keymaster_core::{RecordStore, SiteRecord};

use crate::app::{exit_not_found_with_hint, AppContext};
use crate::cli::ListArgs;
use crate::output::{format_length_window, print_record_details, record_json, records_json};
use crate::ui::{badge, blank_line, header, hint, print, simple_table, Badge, OutputMode};

const LIST_COLUMNS: [&str; 6] = ["Label", "Hostname", "Account", "Iter", "Base", "Length"];

fn record_row(record: &SiteRecord) -> Vec<String> {
    vec![
        record.label.clone(),
        record.hostname.clone(),
        record.account.clone(),
        record.iteration.to_string(),
        record.charset_base.as_base_number().to_string(),
        format_length_window(record),
    ]
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json);

    // Single-record detail view
    if let Some(label) = &args.label {
        let record = match store.get(label)? {
            Some(record) => record,
            None => exit_not_found_with_hint(
                &format!("Record '{}' not found", label),
                "Hint: Run `keymaster list` to see stored labels.",
            ),
        };

        if ui_ctx.mode.is_json() {
            println!("{}", serde_json::to_string_pretty(&record_json(&record))?);
            return Ok(());
        }

        if ui_ctx.mode.is_pretty() && !ctx.quiet() {
            print(&ui_ctx, &header(&ui_ctx, "list", Some(&record.label)));
            blank_line(&ui_ctx);
        }
        print_record_details(&ui_ctx, &record);
        return Ok(());
    }

    let records = store.list()?;

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&records))?);
        return Ok(());
    }

    if ctx.quiet() {
        for record in &records {
            println!("{}", record.label);
        }
        return Ok(());
    }

    if records.is_empty() {
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "No records stored"));
            print(&ui_ctx, &hint(&ui_ctx, "keymaster create <label>"));
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records.iter().map(record_row).collect();

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "list", None));
            blank_line(&ui_ctx);
            print(&ui_ctx, &simple_table(&ui_ctx, &LIST_COLUMNS, &rows));
            blank_line(&ui_ctx);
            let next = "keymaster get <label>  \u{00B7}  keymaster update <label>";
            print(&ui_ctx, &hint(&ui_ctx, next));
        }
        OutputMode::Plain | OutputMode::Json => {
            print(&ui_ctx, &simple_table(&ui_ctx, &LIST_COLUMNS, &rows));
        }
    }

    Ok(())
}
