//! User interaction front-ends.
//!
//! This module provides:
//! - [`UserInterface`], the front-end abstraction used by the commands
//! - [`TerminalUI`] for dialoguer prompts, plain or fuzzy
//! - [`RofiUI`] for the rofi launcher in dmenu mode
//! - [`NonInteractiveUI`] for scripts and pipelines
//! - [`MockUI`] for tests
//!
//! Every front-end implements [`Interaction`], so the expansion engine
//! never depends on which one is active. Status messages go to stderr;
//! only [`UserInterface::output`] writes to stdout.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use ezbp::engine::Interaction;
//! use ezbp::ui::{NonInteractiveUI, OutputMode};
//!
//! let mut overrides = HashMap::new();
//! overrides.insert("EZBP_PROMPT_NAME".to_string(), "Ada".to_string());
//! let mut ui = NonInteractiveUI::with_overrides(OutputMode::Quiet, overrides);
//! assert_eq!(ui.prompt_text("name").unwrap(), "Ada");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod rofi;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, PromptCall};
pub use non_interactive::{prompt_env_key, NonInteractiveUI, TEMPLATE_ENV};
pub use output::OutputMode;
pub use rofi::RofiUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, EzbpTheme};

pub use crate::engine::Interaction;

use console::Term;

use crate::config::{RofiConfig, UiKind};
use crate::error::{EzbpError, Result};
use crate::store::Boilerplate;

/// Front-end used by the commands.
pub trait UserInterface: Interaction {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Set the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Emit a command result on stdout.
    fn output(&mut self, text: &str) {
        write_output(text);
    }

    /// Let the user pick a boilerplate. Returns its name.
    fn select_template(&mut self, templates: &[Boilerplate]) -> Result<String> {
        if templates.is_empty() {
            return Err(EzbpError::Interaction {
                message: "no boilerplates to choose from".to_string(),
            });
        }
        let labels = template_labels(templates);
        let picked = self.select_one(TEMPLATE_PROMPT, &labels)?;
        let index = labels
            .iter()
            .position(|l| *l == picked)
            .ok_or_else(|| EzbpError::Interaction {
                message: format!("'{}' is not a listed boilerplate", picked),
            })?;
        Ok(templates[index].name.clone())
    }

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Label used when picking a boilerplate.
pub const TEMPLATE_PROMPT: &str = "Boilerplate";

/// Width of the body preview in menus and listings.
pub const PREVIEW_WIDTH: usize = 60;

/// First line of `body`, cut to `width` characters.
pub fn preview(body: &str, width: usize) -> String {
    let first = body.lines().next().unwrap_or("");
    let mut out: String = first.chars().take(width).collect();
    if first.chars().count() > width || body.lines().nth(1).is_some() {
        out.push('…');
    }
    out
}

/// Menu entries for a boilerplate pick: usage count, padded name and a
/// preview of the body.
pub fn template_labels(templates: &[Boilerplate]) -> Vec<String> {
    let width = templates
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            format!(
                "{:>5} {:<width$}  {}",
                t.usage_count,
                t.name,
                preview(&t.body, PREVIEW_WIDTH),
                width = width
            )
        })
        .collect()
}

/// Write `text` to stdout, adding a final newline when stdout is a terminal.
pub fn write_output(text: &str) {
    use std::io::Write;

    let mut stdout = std::io::stdout();
    let needs_newline = Term::stdout().is_term() && !text.ends_with('\n');
    let written = if needs_newline {
        writeln!(stdout, "{}", text)
    } else {
        write!(stdout, "{}", text)
    };
    if let Err(e) = written.and_then(|_| stdout.flush()) {
        tracing::debug!("Failed to write output: {}", e);
    }
}

/// Create the front-end for `kind`.
///
/// Without `interactive`, or when a terminal front-end is asked for without
/// a terminal on stderr, prompts are answered from `EZBP_PROMPT_*`
/// environment variables instead.
pub fn create_ui(
    kind: UiKind,
    interactive: bool,
    mode: OutputMode,
    rofi: &RofiConfig,
) -> Box<dyn UserInterface> {
    if !interactive {
        return Box::new(NonInteractiveUI::new(mode));
    }

    match kind {
        UiKind::Rofi => Box::new(RofiUI::new(rofi.clone(), mode)),
        UiKind::Terminal | UiKind::Fuzzy if Term::stderr().is_term() => {
            Box::new(TerminalUI::new(mode, kind == UiKind::Fuzzy))
        }
        UiKind::Terminal | UiKind::Fuzzy => {
            tracing::debug!("No terminal on stderr, using non-interactive prompts");
            Box::new(NonInteractiveUI::new(mode))
        }
    }
}
