//! List command implementation.
//!
//! The `ezbp list` command prints every boilerplate with its usage count,
//! most used first.

use crate::cli::args::ListArgs;
use crate::config::EzbpConfig;
use crate::error::{EzbpError, Result};
use crate::store::{Boilerplate, TemplateStore};
use crate::ui::{preview, EzbpTheme, UserInterface, PREVIEW_WIDTH};

use super::dispatcher::{open_store, Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: EzbpConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: EzbpConfig, args: ListArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

fn render(theme: &EzbpTheme, records: &[Boilerplate]) -> String {
    let width = records.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    records
        .iter()
        .map(|r| {
            let padded = format!("{:<width$}", r.name, width = width);
            format!(
                "{}\n",
                theme.format_listing(r.usage_count, &padded, &preview(&r.body, PREVIEW_WIDTH))
            )
        })
        .collect()
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.config)?;
        let records = store.list();

        if self.args.json {
            let json = serde_json::to_string_pretty(&records)
                .map_err(|e| EzbpError::Other(e.into()))?;
            ui.output(&format!("{}\n", json));
            return Ok(CommandResult::success());
        }

        if records.is_empty() {
            ui.message("No boilerplates yet. Add one with 'ezbp add <name>'.");
            return Ok(CommandResult::success());
        }

        ui.output(&render(&EzbpTheme::detect(), &records));
        Ok(CommandResult::success())
    }
}
