//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::UiKind;
use crate::store::ConflictPolicy;

/// ezbp - Expand stored boilerplates with includes and prompts.
#[derive(Debug, Parser)]
#[command(name = "ezbp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration directory (default: <user config dir>/ezbp)
    #[arg(short, long, global = true, env = "EZBP_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Front-end for prompts (overrides default_ui)
    #[arg(long, global = true, value_enum)]
    pub ui: Option<UiKind>,

    /// Answer prompts from EZBP_PROMPT_* variables instead of asking
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a boilerplate (opens the editor when no content is given)
    Add(AddArgs),

    /// Change a boilerplate (opens the editor when no content is given)
    Edit(EditArgs),

    /// Delete a boilerplate
    #[command(visible_alias = "rm")]
    Del(DelArgs),

    /// List boilerplates, most used first
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Print the raw body of a boilerplate
    Show(ShowArgs),

    /// Expand a boilerplate and print the result (default if no command specified)
    Expand(ExpandArgs),

    /// Import boilerplates from a CSV file with name,value columns
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Boilerplate name
    pub name: String,

    /// Body; opens the editor when omitted
    pub content: Option<String>,
}

/// Arguments for the `edit` command.
#[derive(Debug, Clone, clap::Args)]
pub struct EditArgs {
    /// Boilerplate name
    pub name: String,

    /// New body; opens the editor when omitted
    pub content: Option<String>,
}

/// Arguments for the `del` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DelArgs {
    /// Boilerplate name
    pub name: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Boilerplate name
    pub name: String,
}

/// Arguments for the `expand` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExpandArgs {
    /// Boilerplate to expand; pick one interactively when omitted
    pub name: Option<String>,

    /// Keep picking and expanding until a pick is cancelled
    #[arg(short, long, conflicts_with = "name")]
    pub forever: bool,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// CSV file with a name,value header
    pub file: PathBuf,

    /// What to do when a name already exists
    #[arg(long, value_enum, default_value_t = ConflictPolicy::Ask)]
    pub on_conflict: ConflictPolicy,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
