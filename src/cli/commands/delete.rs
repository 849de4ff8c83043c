//! Delete command implementation.

use crate::cli::args::DelArgs;
use crate::config::EzbpConfig;
use crate::error::Result;
use crate::store::TemplateStore;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The del command implementation.
pub struct DeleteCommand {
    config: EzbpConfig,
    args: DelArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(config: EzbpConfig, args: DelArgs) -> Self {
        Self { config, args }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store(&self.config)?;
        store.delete(&self.args.name)?;
        ui.success(&format!("Deleted '{}'", self.args.name));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::finalize;
    use crate::error::EzbpError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn deletes_existing() {
        let temp = TempDir::new().unwrap();
        let config = finalize(EzbpConfig::default(), temp.path()).unwrap();
        open_store(&config).unwrap().create("sig", "x").unwrap();
        let mut ui = MockUI::new();

        let args = DelArgs {
            name: "sig".to_string(),
        };
        DeleteCommand::new(config.clone(), args)
            .execute(&mut ui)
            .unwrap();

        assert!(!open_store(&config).unwrap().contains("sig"));
        assert!(ui.has_success("Deleted"));
    }

    #[test]
    fn unknown_name_fails() {
        let temp = TempDir::new().unwrap();
        let config = finalize(EzbpConfig::default(), temp.path()).unwrap();
        let mut ui = MockUI::new();

        let args = DelArgs {
            name: "ghost".to_string(),
        };
        let err = DeleteCommand::new(config, args).execute(&mut ui).unwrap_err();
        assert!(matches!(err, EzbpError::TemplateNotFound { .. }));
    }
}
