//! Mock UI implementation for testing.
//!
//! `MockUI` implements [`UserInterface`] and captures all interactions for
//! later assertion. Answers are scripted per prompt label.
//!
//! # Example
//!
//! ```
//! use ezbp::ui::{Interaction, MockUI, PromptCall, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_text("name", "Ada");
//!
//! assert_eq!(ui.prompt_text("name").unwrap(), "Ada");
//! ui.success("Done!");
//!
//! assert_eq!(ui.calls(), &[PromptCall::Text { label: "name".to_string() }]);
//! assert!(ui.has_success("Done"));
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{EzbpError, Result};
use crate::store::Boilerplate;

use super::{Interaction, OutputMode, UserInterface, TEMPLATE_PROMPT};

/// One recorded request to the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCall {
    /// A free-form text prompt.
    Text { label: String },
    /// A pick from a fixed list.
    Select { label: String, choices: Vec<String> },
    /// A boilerplate pick, with the offered names in order.
    Template { names: Vec<String> },
}

/// Mock UI implementation for testing.
///
/// Queued answers win over fixed ones. Unscripted text prompts answer with
/// an empty string and unscripted selections pick the first choice.
/// Boilerplate picks come only from [`queue_template`](Self::queue_template);
/// when the queue runs dry the pick is cancelled.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    outputs: Vec<String>,
    text_responses: HashMap<String, String>,
    text_queues: HashMap<String, VecDeque<String>>,
    select_responses: HashMap<String, String>,
    select_queues: HashMap<String, VecDeque<String>>,
    template_picks: VecDeque<String>,
    cancelled: HashSet<String>,
    failures: HashMap<String, String>,
    calls: Vec<PromptCall>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Answer every text prompt labelled `label` with `response`.
    pub fn set_text(&mut self, label: &str, response: &str) {
        self.text_responses
            .insert(label.to_string(), response.to_string());
    }

    /// Queue one answer for the next text prompt labelled `label`.
    pub fn queue_text(&mut self, label: &str, response: &str) {
        self.text_queues
            .entry(label.to_string())
            .or_default()
            .push_back(response.to_string());
    }

    /// Answer every selection labelled `label` with `choice`.
    pub fn set_selection(&mut self, label: &str, choice: &str) {
        self.select_responses
            .insert(label.to_string(), choice.to_string());
    }

    /// Queue one answer for the next selection labelled `label`.
    pub fn queue_selection(&mut self, label: &str, choice: &str) {
        self.select_queues
            .entry(label.to_string())
            .or_default()
            .push_back(choice.to_string());
    }

    /// Queue a boilerplate name for the next pick.
    pub fn queue_template(&mut self, name: &str) {
        self.template_picks.push_back(name.to_string());
    }

    /// Dismiss every prompt labelled `label`.
    pub fn cancel_at(&mut self, label: &str) {
        self.cancelled.insert(label.to_string());
    }

    /// Fail every prompt labelled `label` with an interaction error.
    pub fn fail_at(&mut self, label: &str, message: &str) {
        self.failures.insert(label.to_string(), message.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Every prompt request, in order.
    pub fn calls(&self) -> &[PromptCall] {
        &self.calls
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get everything written as command output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.outputs.clear();
        self.calls.clear();
    }

    fn check_scripted(&self, label: &str) -> Result<()> {
        if let Some(message) = self.failures.get(label) {
            return Err(EzbpError::Interaction {
                message: message.clone(),
            });
        }
        if self.cancelled.contains(label) {
            return Err(EzbpError::Cancelled {
                label: label.to_string(),
            });
        }
        Ok(())
    }
}

impl Interaction for MockUI {
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String> {
        self.calls.push(PromptCall::Select {
            label: label.to_string(),
            choices: choices.to_vec(),
        });
        self.check_scripted(label)?;

        let scripted = self
            .select_queues
            .get_mut(label)
            .and_then(|q| q.pop_front())
            .or_else(|| self.select_responses.get(label).cloned());

        match scripted {
            Some(choice) if choices.contains(&choice) => Ok(choice),
            Some(choice) => Err(EzbpError::Interaction {
                message: format!("'{}' is not one of the choices for '{}'", choice, label),
            }),
            None => choices.first().cloned().ok_or_else(|| EzbpError::Interaction {
                message: format!("no choices for '{}'", label),
            }),
        }
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        self.calls.push(PromptCall::Text {
            label: label.to_string(),
        });
        self.check_scripted(label)?;

        if let Some(response) = self.text_queues.get_mut(label).and_then(|q| q.pop_front()) {
            return Ok(response);
        }
        Ok(self.text_responses.get(label).cloned().unwrap_or_default())
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn select_template(&mut self, templates: &[Boilerplate]) -> Result<String> {
        let names: Vec<String> = templates.iter().map(|t| t.name.clone()).collect();
        self.calls.push(PromptCall::Template {
            names: names.clone(),
        });
        self.check_scripted(TEMPLATE_PROMPT)?;

        let picked = self
            .template_picks
            .pop_front()
            .ok_or_else(|| EzbpError::Cancelled {
                label: TEMPLATE_PROMPT.to_string(),
            })?;
        if !names.contains(&picked) {
            return Err(EzbpError::Interaction {
                message: format!("'{}' is not a listed boilerplate", picked),
            });
        }
        Ok(picked)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Failed");
        ui.output("result");

        assert!(ui.has_message("Hello"));
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Failed"));
        assert_eq!(ui.outputs(), &["result".to_string()]);
    }

    #[test]
    fn text_queue_wins_over_fixed_response() {
        let mut ui = MockUI::new();
        ui.set_text("x", "fixed");
        ui.queue_text("x", "first");

        assert_eq!(ui.prompt_text("x").unwrap(), "first");
        assert_eq!(ui.prompt_text("x").unwrap(), "fixed");
    }

    #[test]
    fn unscripted_text_is_empty() {
        let mut ui = MockUI::new();
        assert_eq!(ui.prompt_text("anything").unwrap(), "");
    }

    #[test]
    fn unscripted_selection_picks_first() {
        let mut ui = MockUI::new();
        assert_eq!(ui.select_one("c", &choices(&["a", "b"])).unwrap(), "a");
    }

    #[test]
    fn selection_must_be_a_choice() {
        let mut ui = MockUI::new();
        ui.set_selection("c", "z");
        assert!(ui.select_one("c", &choices(&["a", "b"])).is_err());
    }

    #[test]
    fn queued_selections_in_order() {
        let mut ui = MockUI::new();
        ui.queue_selection("c", "b");
        ui.queue_selection("c", "a");
        let options = choices(&["a", "b"]);
        assert_eq!(ui.select_one("c", &options).unwrap(), "b");
        assert_eq!(ui.select_one("c", &options).unwrap(), "a");
    }

    #[test]
    fn cancel_at_label() {
        let mut ui = MockUI::new();
        ui.cancel_at("stop");
        let err = ui.prompt_text("stop").unwrap_err();
        assert!(matches!(err, EzbpError::Cancelled { label } if label == "stop"));
        assert_eq!(ui.calls().len(), 1);
    }

    #[test]
    fn fail_at_label() {
        let mut ui = MockUI::new();
        ui.fail_at("Pick", "launcher crashed");
        let err = ui.select_one("Pick", &choices(&["a"])).unwrap_err();
        assert!(matches!(err, EzbpError::Interaction { ref message } if message == "launcher crashed"));
        assert!(ui.prompt_text("other").is_ok());
    }

    #[test]
    fn template_picks_are_queued() {
        let mut ui = MockUI::new();
        ui.queue_template("b");
        let list = vec![Boilerplate::new("a", "1"), Boilerplate::new("b", "2")];

        assert_eq!(ui.select_template(&list).unwrap(), "b");
        assert!(matches!(
            ui.select_template(&list),
            Err(EzbpError::Cancelled { .. })
        ));
        assert_eq!(
            ui.calls()[0],
            PromptCall::Template {
                names: vec!["a".into(), "b".into()]
            }
        );
    }

    #[test]
    fn clear_resets_captures() {
        let mut ui = MockUI::new();
        ui.message("x");
        let _ = ui.prompt_text("y");
        ui.clear();
        assert!(ui.messages().is_empty());
        assert!(ui.calls().is_empty());
    }

    #[test]
    fn interactive_flag() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
