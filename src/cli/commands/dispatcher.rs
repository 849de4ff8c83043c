//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ExpandArgs};
use crate::config::EzbpConfig;
use crate::error::Result;
use crate::store::FileStore;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Open the boilerplate store named by `config`.
pub fn open_store(config: &EzbpConfig) -> Result<FileStore> {
    FileStore::open(&config.store_path)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: EzbpConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher using a loaded configuration.
    pub fn new(config: EzbpConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EzbpConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `expand` with no arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config.clone();
        match &cli.command {
            Some(Commands::Add(args)) => {
                super::add::AddCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Edit(args)) => {
                super::edit::EditCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Del(args)) => {
                super::delete::DeleteCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Expand(args)) => {
                super::expand::ExpandCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Import(args)) => {
                super::import::ImportCommand::new(config, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::expand::ExpandCommand::new(config, ExpandArgs::default()).execute(ui),
        }
    }
}
