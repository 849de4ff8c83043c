//! dialoguer prompts on a terminal.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input, Select};

use crate::error::{EzbpError, Result};

/// Convert dialoguer errors to EzbpError.
fn map_dialoguer_err(e: dialoguer::Error) -> EzbpError {
    EzbpError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Pick one of `choices`. Esc or `q` cancels.
///
/// Returns the index of the picked item.
pub fn select_index(term: &Term, label: &str, choices: &[String], fuzzy: bool) -> Result<usize> {
    let theme = prompt_theme();
    let picked = if fuzzy {
        FuzzySelect::with_theme(&theme)
            .with_prompt(label)
            .items(choices)
            .default(0)
            .interact_on_opt(term)
    } else {
        Select::with_theme(&theme)
            .with_prompt(label)
            .items(choices)
            .default(0)
            .interact_on_opt(term)
    }
    .map_err(map_dialoguer_err)?;

    picked.ok_or_else(|| EzbpError::Cancelled {
        label: label.to_string(),
    })
}

/// Read one line of free-form text. Empty input is allowed.
pub fn input_text(term: &Term, label: &str) -> Result<String> {
    Input::<String>::with_theme(&prompt_theme())
        .with_prompt(label)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Display text for `choice` in a menu; empty choices would otherwise render blank.
pub fn display_choice(choice: &str) -> String {
    if choice.is_empty() {
        "(empty)".to_string()
    } else {
        choice.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_choice_has_visible_label() {
        assert_eq!(display_choice(""), "(empty)");
        assert_eq!(display_choice("red"), "red");
    }

    #[test]
    fn dialoguer_errors_map_to_io() {
        let err = map_dialoguer_err(dialoguer::Error::IO(std::io::Error::other("tty gone")));
        assert!(matches!(err, EzbpError::Io(_)));
    }
}
