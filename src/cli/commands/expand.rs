//! Expand command implementation.
//!
//! The `ezbp expand` command resolves a boilerplate and writes the result
//! to stdout. Without a name the user picks one; with `--forever` the pick
//! and expand cycle repeats until a pick is cancelled.

use crate::cli::args::ExpandArgs;
use crate::config::EzbpConfig;
use crate::engine::Expander;
use crate::error::{EzbpError, Result};
use crate::store::{FileStore, TemplateStore};
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The expand command implementation.
pub struct ExpandCommand {
    config: EzbpConfig,
    args: ExpandArgs,
}

impl ExpandCommand {
    /// Create a new expand command.
    pub fn new(config: EzbpConfig, args: ExpandArgs) -> Self {
        Self { config, args }
    }

    fn expander(&self) -> Result<Expander<FileStore>> {
        Ok(Expander::new(open_store(&self.config)?).with_max_inclusions(self.config.max_inclusions))
    }

    fn run_forever(
        &self,
        expander: &mut Expander<FileStore>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        loop {
            let templates = expander.store().list();
            let name = match ui.select_template(&templates) {
                Ok(name) => name,
                Err(EzbpError::Cancelled { .. }) => return Ok(CommandResult::success()),
                Err(e) => return Err(e),
            };

            match expander.expand(&name, ui) {
                Ok(text) => ui.output(&text),
                Err(EzbpError::Cancelled { label }) => {
                    ui.warning(&format!("Expansion of '{}' cancelled at '{}'", name, label));
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Command for ExpandCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut expander = self.expander()?;

        if let Some(name) = &self.args.name {
            let text = expander.expand(name, ui)?;
            ui.output(&text);
            return Ok(CommandResult::success());
        }

        if expander.store().list().is_empty() {
            ui.warning("No boilerplates yet. Add one with 'ezbp add <name>'.");
            return Ok(CommandResult::failure(1));
        }

        if self.args.forever {
            if !ui.is_interactive() {
                return Err(EzbpError::ConfigValidationError {
                    message: "--forever needs an interactive front-end".to_string(),
                });
            }
            return self.run_forever(&mut expander, ui);
        }

        let templates = expander.store().list();
        let name = ui.select_template(&templates)?;
        let text = expander.expand(&name, ui)?;
        ui.output(&text);
        Ok(CommandResult::success())
    }
}
