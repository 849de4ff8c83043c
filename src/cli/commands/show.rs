//! Show command implementation.

use crate::cli::args::ShowArgs;
use crate::config::EzbpConfig;
use crate::error::{EzbpError, Result};
use crate::store::TemplateStore;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// Prints the raw, unexpanded body of a boilerplate.
pub struct ShowCommand {
    config: EzbpConfig,
    args: ShowArgs,
}

impl ShowCommand {
    pub fn new(config: EzbpConfig, args: ShowArgs) -> Self {
        Self { config, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.config)?;
        let body = store
            .lookup(&self.args.name)
            .ok_or_else(|| EzbpError::TemplateNotFound {
                name: self.args.name.clone(),
            })?;
        ui.output(&body);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::finalize;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn prints_raw_body() {
        let temp = TempDir::new().unwrap();
        let config = finalize(EzbpConfig::default(), temp.path()).unwrap();
        open_store(&config)
            .unwrap()
            .create("mail", "Hi {{Name}}\n[[sig]]")
            .unwrap();
        let mut ui = MockUI::new();

        let args = ShowArgs {
            name: "mail".to_string(),
        };
        ShowCommand::new(config.clone(), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.outputs(), &["Hi {{Name}}\n[[sig]]".to_string()]);
        assert!(ui.calls().is_empty());
        assert_eq!(open_store(&config).unwrap().get("mail").unwrap().usage_count, 0);
    }
}
