//! Edit command implementation.

use crate::cli::args::EditArgs;
use crate::config::EzbpConfig;
use crate::editor;
use crate::error::{EzbpError, Result};
use crate::store::TemplateStore;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The edit command implementation.
pub struct EditCommand {
    config: EzbpConfig,
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(config: EzbpConfig, args: EditArgs) -> Self {
        Self { config, args }
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = &self.args.name;
        let mut store = open_store(&self.config)?;
        let current = store
            .get(name)
            .ok_or_else(|| EzbpError::TemplateNotFound { name: name.clone() })?;

        let body = match &self.args.content {
            Some(content) => content.clone(),
            None => {
                let command = editor::resolve_editor(self.config.editor.as_deref());
                editor::edit(&command, &current.body)?
            }
        };

        if body == current.body {
            ui.message(&format!("No changes to '{}'", name));
            return Ok(CommandResult::success());
        }

        store.update(name, &body)?;
        ui.success(&format!("Updated '{}'", name));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::finalize;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn setup(temp: &TempDir) -> EzbpConfig {
        let config = finalize(EzbpConfig::default(), temp.path()).unwrap();
        let mut store = open_store(&config).unwrap();
        store.create("sig", "-- old").unwrap();
        config
    }

    fn args(name: &str, content: Option<&str>) -> EditArgs {
        EditArgs {
            name: name.to_string(),
            content: content.map(String::from),
        }
    }

    #[test]
    fn replaces_body() {
        let temp = TempDir::new().unwrap();
        let config = setup(&temp);
        let mut ui = MockUI::new();

        EditCommand::new(config.clone(), args("sig", Some("-- new")))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_success("Updated"));
        let store = open_store(&config).unwrap();
        assert_eq!(store.lookup("sig"), Some("-- new".to_string()));
    }

    #[test]
    fn unknown_name_fails() {
        let temp = TempDir::new().unwrap();
        let config = setup(&temp);
        let mut ui = MockUI::new();

        let err = EditCommand::new(config, args("ghost", Some("x")))
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, EzbpError::TemplateNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn untouched_editor_reports_no_changes() {
        let temp = TempDir::new().unwrap();
        let mut config = setup(&temp);
        config.editor = Some("true".to_string());
        let mut ui = MockUI::new();

        EditCommand::new(config.clone(), args("sig", None))
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("No changes"));
        let store = open_store(&config).unwrap();
        assert_eq!(store.lookup("sig"), Some("-- old".to_string()));
    }
}
