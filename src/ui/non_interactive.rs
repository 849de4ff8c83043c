//! Non-interactive UI for scripts and pipelines.

use std::collections::HashMap;

use crate::error::{EzbpError, Result};
use crate::store::Boilerplate;

use super::{Interaction, OutputMode, UserInterface};

const ENV_PREFIX: &str = "EZBP_PROMPT_";

/// Environment variable naming the boilerplate to expand when none is given.
pub const TEMPLATE_ENV: &str = "EZBP_TEMPLATE";

/// Environment variable that answers the prompt labelled `label`.
///
/// The label is uppercased and every character outside `[A-Z0-9]` becomes
/// `_`, so `{{Your name}}` reads `EZBP_PROMPT_YOUR_NAME`.
pub fn prompt_env_key(label: &str) -> String {
    let suffix: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", ENV_PREFIX, suffix)
}

/// UI implementation for non-interactive mode.
///
/// Every answer comes from an `EZBP_PROMPT_*` variable; a prompt without
/// one is an error. The boilerplate pick reads [`TEMPLATE_ENV`] as a name.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX) || k == TEMPLATE_ENV)
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(&self, label: &str) -> Result<String> {
        let key = prompt_env_key(label);
        self.env_overrides
            .get(&key)
            .cloned()
            .ok_or_else(|| EzbpError::Interaction {
                message: format!(
                    "Cannot prompt for '{}' in non-interactive mode (set {})",
                    label, key
                ),
            })
    }
}

impl Interaction for NonInteractiveUI {
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String> {
        let value = self.answer(label)?;
        if !choices.contains(&value) {
            return Err(EzbpError::Interaction {
                message: format!(
                    "'{}' is not one of the choices for '{}': {}",
                    value,
                    label,
                    choices.join(", ")
                ),
            });
        }
        Ok(value)
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        self.answer(label)
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn select_template(&mut self, templates: &[Boilerplate]) -> Result<String> {
        let name = self
            .env_overrides
            .get(TEMPLATE_ENV)
            .cloned()
            .ok_or_else(|| EzbpError::Interaction {
                message: format!(
                    "Cannot pick a boilerplate in non-interactive mode (set {} or pass a name)",
                    TEMPLATE_ENV
                ),
            })?;
        if !templates.iter().any(|t| t.name == name) {
            return Err(EzbpError::TemplateNotFound { name });
        }
        Ok(name)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
