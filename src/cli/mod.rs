//! Command-line interface for ezbp.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, Cli, Commands, CompletionsArgs, DelArgs, EditArgs, ExpandArgs, ImportArgs, ListArgs,
    ShowArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
