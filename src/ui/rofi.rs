//! rofi launcher front-end.
//!
//! Selections run `rofi -dmenu -format i` with one choice per stdin line
//! and read back the picked index. Text prompts run `rofi -dmenu` with no
//! input lines. Exit code 1 is rofi's Esc.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::RofiConfig;
use crate::error::{EzbpError, Result};

use super::prompts::display_choice;
use super::{Interaction, OutputMode, UserInterface};

/// UI implementation backed by rofi.
pub struct RofiUI {
    config: RofiConfig,
    mode: OutputMode,
}

impl RofiUI {
    /// Create a rofi UI.
    pub fn new(config: RofiConfig, mode: OutputMode) -> Self {
        Self { config, mode }
    }

    fn args(&self, label: &str, extra: &[String]) -> Vec<String> {
        let mut args = vec!["-dmenu".to_string()];
        if !label.is_empty() {
            args.push("-p".to_string());
            args.push(label.to_string());
        }
        if let Some(theme) = self.config.theme.as_deref().filter(|t| !t.is_empty()) {
            args.push("-theme".to_string());
            args.push(theme.to_string());
        }
        args.extend(extra.iter().cloned());
        args
    }

    /// Run rofi and return its stdout without the trailing newline.
    fn run(&self, label: &str, args: Vec<String>, input: Option<String>) -> Result<String> {
        tracing::debug!("Running {} {:?}", self.config.path, args);

        let mut cmd = Command::new(&self.config.path);
        cmd.args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = cmd.spawn().map_err(|e| EzbpError::Interaction {
            message: format!("failed to start '{}': {}", self.config.path, e),
        })?;

        if let (Some(lines), Some(mut stdin)) = (input, child.stdin.take()) {
            // rofi may exit before reading every choice.
            if let Err(e) = stdin.write_all(lines.as_bytes()) {
                tracing::debug!("rofi closed stdin early: {}", e);
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            if output.status.code() == Some(1) {
                return Err(EzbpError::Cancelled {
                    label: label.to_string(),
                });
            }
            return Err(EzbpError::Interaction {
                message: format!(
                    "rofi failed ({}): {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}

impl Interaction for RofiUI {
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String> {
        let lines: String = choices
            .iter()
            .map(|c| format!("{}\n", display_choice(c).replace('\n', " ")))
            .collect();

        let mut args = self.args(label, &self.config.select_args);
        args.push("-format".to_string());
        args.push("i".to_string());

        let picked = self.run(label, args, Some(lines))?;
        if picked.trim().is_empty() {
            return Err(EzbpError::Cancelled {
                label: label.to_string(),
            });
        }

        picked
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| choices.get(i))
            .cloned()
            .ok_or_else(|| EzbpError::Interaction {
                message: format!("rofi returned an unknown entry '{}'", picked.trim()),
            })
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        let args = self.args(label, &self.config.input_args);
        self.run(label, args, None)
    }
}

impl UserInterface for RofiUI {
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

    fn is_interactive(&self) -> bool {
        true
    }
}
