//! Prompt helpers and proto-password entry.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, Password, Select};
use zeroize::Zeroizing;

use crate::errors::CliError;

/// All prompts need stdin on a TTY; `what` names the prompt in the error.
fn require_tty(what: &str) -> anyhow::Result<()> {
    if std::io::stdin().is_terminal() {
        return Ok(());
    }
    Err(anyhow::anyhow!(
        "Interactive {} required. Use flags or run on a TTY.",
        what
    ))
}

/// Read the proto-password from KEYMASTER_PROTO_PASSWORD, or prompt for it.
///
/// Interactive entry asks twice because a silent typo would derive a
/// plausible-looking wrong password. The value lives in a zeroizing
/// wrapper and is never stored or echoed.
pub fn proto_password(interactive: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("KEYMASTER_PROTO_PASSWORD") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }
    if !interactive {
        CliError::auth_failed(
            "No proto-password provided and no TTY available",
            "Hint: Set KEYMASTER_PROTO_PASSWORD for scripted use.",
        )
        .exit();
    }
    let entered = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Proto-password")
        .with_confirmation("Again, please", "Entries do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read proto-password: {}", e))?;
    Ok(Zeroizing::new(entered))
}

/// Prompt for text with an optional default.
pub fn prompt_input(prompt: &str, default: Option<&str>) -> anyhow::Result<String> {
    require_tty("input")?;

    let theme = ColorfulTheme::default();
    let mut builder = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(def) = default {
        builder = builder.default(def.to_string());
    }
    Ok(builder.interact_text()?)
}

/// Prompt for text where blank means "none".
pub fn prompt_optional(prompt: &str, default: Option<&str>) -> anyhow::Result<Option<String>> {
    require_tty("input")?;

    let theme = ColorfulTheme::default();
    let mut builder = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(def) = default {
        builder = builder.default(def.to_string());
    }

    let entered = builder.interact_text()?;
    if entered.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(entered))
    }
}

/// Prompt for a number with a default.
pub fn prompt_u32(prompt: &str, default: u32) -> anyhow::Result<u32> {
    require_tty("input")?;

    Ok(Input::<u32>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_text()?)
}

/// Prompt to pick one of `options` by index.
pub fn prompt_select(prompt: &str, options: &[&str], default: usize) -> anyhow::Result<usize> {
    require_tty("selection")?;

    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?)
}

/// Yes/no prompt.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    require_tty("confirmation")?;

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick a record label interactively from the stored labels.
///
/// Exits with a typed error when the store is empty or stdin is not a TTY,
/// so callers can rely on getting a valid label back.
pub fn select_label(labels: &[String]) -> anyhow::Result<String> {
    if labels.is_empty() {
        CliError::not_found(
            "No records stored",
            "Hint: Run `keymaster create` to add one.",
        )
        .exit();
    }
    if !std::io::stdin().is_terminal() {
        CliError::invalid_input(
            "A label is required when stdin is not a TTY\nHint: pass LABEL as an argument.",
        )
        .exit();
    }

    let index = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Record")
        .items(labels)
        .default(0)
        .interact()?;

    Ok(labels[index].clone())
}
