//! Command implementations.
//!
//! Each subcommand lives in its own module and implements [`Command`].

pub mod add;
pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod edit;
pub mod expand;
pub mod import;
pub mod list;
pub mod show;

pub use dispatcher::{open_store, Command, CommandDispatcher, CommandResult};
