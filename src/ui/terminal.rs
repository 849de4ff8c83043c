//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::prompts::{display_choice, input_text, select_index};
use super::{EzbpTheme, Interaction, OutputMode, UserInterface};

/// Interactive terminal UI implementation.
///
/// Prompts and messages are drawn on stderr so stdout carries only the
/// expanded text. In fuzzy mode selections are filtered as you type.
pub struct TerminalUI {
    term: Term,
    theme: EzbpTheme,
    mode: OutputMode,
    fuzzy: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, fuzzy: bool) -> Self {
        Self {
            term: Term::stderr(),
            theme: EzbpTheme::detect(),
            mode,
            fuzzy,
        }
    }

    /// Check whether selections use fuzzy filtering.
    pub fn is_fuzzy(&self) -> bool {
        self.fuzzy
    }
}

impl Interaction for TerminalUI {
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String> {
        let shown: Vec<String> = choices.iter().map(|c| display_choice(c)).collect();
        let index = select_index(&self.term, label, &shown, self.fuzzy)?;
        Ok(choices[index].clone())
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        input_text(&self.term, label)
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
