//! Configuration schema definitions for ezbp.
//!
//! This module contains the structs that map to `config.yml`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration structure for config.yml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EzbpConfig {
    /// Boilerplate store file. Relative paths are resolved against the
    /// config directory; empty means `<config dir>/boilerplates.yml`.
    #[serde(skip_serializing_if = "is_empty_path")]
    pub store_path: PathBuf,

    /// Front-end used when `--ui` is not given: terminal, fuzzy or rofi
    pub default_ui: String,

    /// Editor command for `add` and `edit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Inclusion cap before an expansion is reported as cyclic
    pub max_inclusions: usize,

    /// rofi front-end settings
    pub rofi: RofiConfig,
}

impl Default for EzbpConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::new(),
            default_ui: UiKind::Terminal.to_string(),
            editor: None,
            max_inclusions: default_max_inclusions(),
            rofi: RofiConfig::default(),
        }
    }
}

impl EzbpConfig {
    /// The configured front-end. Unknown names fall back to the terminal.
    pub fn ui_kind(&self) -> UiKind {
        self.default_ui.parse().unwrap_or_default()
    }
}

fn default_max_inclusions() -> usize {
    1000
}

fn is_empty_path(p: &PathBuf) -> bool {
    p.as_os_str().is_empty()
}

/// rofi settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RofiConfig {
    /// Command or path of the rofi executable
    pub path: String,

    /// Theme passed as `-theme`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Extra arguments for selection menus
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_args: Vec<String>,

    /// Extra arguments for text input
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input_args: Vec<String>,
}

impl Default for RofiConfig {
    fn default() -> Self {
        Self {
            path: "rofi".to_string(),
            theme: None,
            select_args: Vec::new(),
            input_args: Vec::new(),
        }
    }
}

/// Available interaction front-ends
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UiKind {
    /// dialoguer prompts in the terminal
    #[default]
    Terminal,
    /// Terminal prompts with fuzzy filtering
    Fuzzy,
    /// The rofi launcher
    Rofi,
}

impl FromStr for UiKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "fuzzy" => Ok(Self::Fuzzy),
            "rofi" => Ok(Self::Rofi),
            _ => Err(format!("unknown ui: {}", s)),
        }
    }
}

impl fmt::Display for UiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terminal => "terminal",
            Self::Fuzzy => "fuzzy",
            Self::Rofi => "rofi",
        };
        f.write_str(name)
    }
}
