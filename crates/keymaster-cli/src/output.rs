//! Output formatting helpers for record display.

use keymaster_core::SiteRecord;

use crate::ui::{kv, print, UiContext};

/// Convert a record to JSON for output.
pub fn record_json(record: &SiteRecord) -> serde_json::Value {
    serde_json::json!({
        "label": record.label,
        "account": record.account,
        "hostname": record.hostname,
        "iteration": record.iteration,
        "hint": record.hint,
        "base": record.charset_base.as_base_number(),
        "use_special_chars": record.use_special_chars,
        "length_start": record.length_start,
        "length_end": record.length_end,
    })
}

/// Convert multiple records to a JSON array for output.
pub fn records_json(records: &[SiteRecord]) -> Vec<serde_json::Value> {
    records.iter().map(record_json).collect()
}

/// Format the length window for display ("16" or "12-16").
pub fn format_length_window(record: &SiteRecord) -> String {
    if record.length_start == record.length_end {
        record.length_start.to_string()
    } else {
        format!("{}-{}", record.length_start, record.length_end)
    }
}

/// Print the full details of a record as key-value lines.
pub fn print_record_details(ctx: &UiContext, record: &SiteRecord) {
    print(ctx, &kv(ctx, "Label", &record.label));
    print(ctx, &kv(ctx, "Account", &record.account));
    print(ctx, &kv(ctx, "Hostname", &record.hostname));
    print(ctx, &kv(ctx, "Iteration", &record.iteration.to_string()));
    print(
        ctx,
        &kv(ctx, "Base", &record.charset_base.as_base_number().to_string()),
    );
    print(
        ctx,
        &kv(
            ctx,
            "Special",
            if record.use_special_chars { "yes" } else { "no" },
        ),
    );
    print(ctx, &kv(ctx, "Length", &format_length_window(record)));
    if !record.hint.is_empty() {
        print(ctx, &kv(ctx, "Hint", &record.hint));
    }
}
