use clap::{Parser, Subcommand};
use formwright_model::{FieldType, RuleAction, RuleOperator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "formwright")]
#[command(about = "Build, fill and submit forms from a JSON schema")]
pub struct Cli {
    /// SQLite file the form is saved in (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep the form in memory only; nothing is saved
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the form with values, enabled state and errors
    Show,

    /// Append a field
    Add {
        field_type: FieldType,
        label: String,
        #[arg(long)]
        required: bool,
        /// Choice for select/radio fields (repeatable)
        #[arg(long = "option")]
        options: Vec<String>,
        #[arg(long)]
        placeholder: Option<String>,
        /// Group id or title
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        min: Option<String>,
        #[arg(long)]
        max: Option<String>,
        #[arg(long)]
        pattern: Option<String>,
        /// Allow several choices in a select
        #[arg(long)]
        multiple: bool,
    },

    /// Append a section header
    Section { title: Option<String> },

    /// Add a field group
    Group { title: Option<String> },

    /// Remove the field at an index
    Remove { index: usize },

    /// Copy the field at an index right after itself
    Duplicate { index: usize },

    /// Move a field from one index to another
    Move { from: usize, to: usize },

    /// Set a field's value
    Set { field_id: String, value: String },

    /// Enable or disable a field based on another field's value
    When {
        target: String,
        source: String,
        operator: RuleOperator,
        value: String,
        action: RuleAction,
    },

    /// Remove a field's conditional rule
    Always { target: String },

    /// Write form-schema.json into a directory
    Export { dir: Option<PathBuf> },

    /// Replace the form with a schema file
    Import { file: PathBuf },

    /// Validate and send the current values
    Submit {
        /// Webhook URL (overrides the config file)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Start over from the default form
    Reset,
}
