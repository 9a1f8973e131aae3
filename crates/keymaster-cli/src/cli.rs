use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use keymaster_core::VERSION;

/// Keymaster - deterministic password derivation from non-secret metadata
#[derive(Parser)]
#[command(name = "keymaster", author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the record database
    #[arg(short = 'd', long, global = true, env = "KEYMASTER_DB")]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print as little as possible
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII-only output (no unicode symbols)
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments to `keymaster create`.
#[derive(Args)]
pub struct CreateArgs {
    /// Mnemonic label for the new record
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,

    /// Account/username at the site
    #[arg(long)]
    pub account: Option<String>,

    /// Site hostname
    #[arg(long)]
    pub hostname: Option<String>,

    /// Rotation counter (default 1)
    #[arg(long)]
    pub iteration: Option<u32>,

    /// Charset policy: 32 (alphanumeric) or 64 (may include symbols)
    #[arg(long, value_name = "32|64")]
    pub base: Option<u32>,

    /// Allow symbol characters in the output (Base64 sites only)
    #[arg(long, value_name = "BOOL")]
    pub special: Option<bool>,

    /// Inclusive lower bound of the length window
    #[arg(long, value_name = "N")]
    pub length_start: Option<u32>,

    /// Inclusive upper bound of the length window
    #[arg(long, value_name = "N")]
    pub length_end: Option<u32>,

    /// Free-text reminder (never used in derivation)
    #[arg(long)]
    pub hint: Option<String>,

    /// Never prompt; missing required fields become errors
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments to `keymaster update`.
#[derive(Args)]
pub struct UpdateArgs {
    /// Label of the record to edit
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,

    /// New label (relabeling never changes the derived password)
    #[arg(long, value_name = "NEW")]
    pub relabel: Option<String>,

    /// Account/username at the site
    #[arg(long)]
    pub account: Option<String>,

    /// Site hostname
    #[arg(long)]
    pub hostname: Option<String>,

    /// Rotation counter
    #[arg(long)]
    pub iteration: Option<u32>,

    /// Charset policy: 32 (alphanumeric) or 64 (may include symbols)
    #[arg(long, value_name = "32|64")]
    pub base: Option<u32>,

    /// Allow symbol characters in the output (Base64 sites only)
    #[arg(long, value_name = "BOOL")]
    pub special: Option<bool>,

    /// Inclusive lower bound of the length window
    #[arg(long, value_name = "N")]
    pub length_start: Option<u32>,

    /// Inclusive upper bound of the length window
    #[arg(long, value_name = "N")]
    pub length_end: Option<u32>,

    /// Free-text reminder (never used in derivation)
    #[arg(long)]
    pub hint: Option<String>,

    /// Disable interactive prompts (unspecified fields keep their values)
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments to `keymaster list`.
#[derive(Args)]
pub struct ListArgs {
    /// Show full details for one record instead of the table
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments to `keymaster hint`.
#[derive(Args)]
pub struct HintArgs {
    /// Label of the record
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,
}

/// Arguments to `keymaster get`.
#[derive(Args)]
pub struct GetArgs {
    /// Label of the record to derive a password for
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments to `keymaster delete`.
#[derive(Args)]
pub struct DeleteArgs {
    /// Label of the record to delete
    #[arg(value_name = "LABEL")]
    pub label: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments to `keymaster completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a site record to the database
    Create(CreateArgs),

    /// Edit an existing site record (fields, rotation counter, or label)
    Update(UpdateArgs),

    /// List site records
    List(ListArgs),

    /// Show the stored hint for a record
    Hint(HintArgs),

    /// Derive and print the password for a record
    Get(GetArgs),

    /// Delete a site record
    Delete(DeleteArgs),

    /// Print a completion script for a shell
    Completions(CompletionsArgs),
}
