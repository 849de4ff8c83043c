//! Add command implementation.
//!
//! The `ezbp add` command stores a new boilerplate, taking the body from
//! the command line or from the editor.

use crate::cli::args::AddArgs;
use crate::config::EzbpConfig;
use crate::editor;
use crate::engine::is_template_identifier;
use crate::error::{EzbpError, Result};
use crate::store::TemplateStore;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    config: EzbpConfig,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(config: EzbpConfig, args: AddArgs) -> Self {
        Self { config, args }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.name;
        let mut store = open_store(&self.config)?;

        // Fail before the editor opens so no typing is lost.
        if store.contains(name) {
            return Err(EzbpError::AlreadyExists { name: name.clone() });
        }

        let body = match &self.args.content {
            Some(content) => content.clone(),
            None => {
                let command = editor::resolve_editor(self.config.editor.as_deref());
                editor::edit(&command, "")?
            }
        };

        store.create(name, &body)?;

        if !is_template_identifier(name) {
            ui.warning(&format!(
                "'{}' cannot be included with [[...]]; only letters, digits and _ are allowed there",
                name
            ));
        }
        ui.success(&format!("Added '{}'", name));
        Ok(CommandResult::success())
    }
}
