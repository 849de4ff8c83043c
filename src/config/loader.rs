//! Configuration file discovery and loading.
//!
//! The configuration directory is, in priority order:
//! 1. `--config <dir>` (or `EZBP_CONFIG_DIR`)
//! 2. `<user config dir>/ezbp` (`~/.config/ezbp` on Linux)
//!
//! It holds `config.yml` and, unless configured otherwise, the boilerplate
//! store `boilerplates.yml`.

use crate::config::schema::{EzbpConfig, UiKind};
use crate::error::{EzbpError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Default store file name inside the config directory.
pub const STORE_FILE_NAME: &str = "boilerplates.yml";

/// Written on first run.
const DEFAULT_CONFIG: &str = r#"# ezbp configuration

# Boilerplate store. Relative paths are resolved against this directory.
# store_path: boilerplates.yml

# Front-end used when --ui is not given: terminal, fuzzy or rofi.
default_ui: terminal

# Editor for `ezbp add` and `ezbp edit`. Falls back to $VISUAL, then $EDITOR.
# editor: vim

# Inclusions allowed in one expansion before it is reported as cyclic.
max_inclusions: 1000

# rofi settings, used with default_ui: rofi or --ui rofi.
rofi:
  path: rofi
  # theme: solarized
  # Extra arguments for selection menus, e.g. case-insensitive matching.
  # select_args: ["-i"]
  # Extra arguments for text input, e.g. hidden input.
  # input_args: ["-password"]
"#;

/// Pick the configuration directory.
pub fn resolve_config_dir(config_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = config_override {
        return Ok(dir.to_path_buf());
    }
    dirs::config_dir()
        .map(|dir| dir.join("ezbp"))
        .ok_or_else(|| EzbpError::ConfigValidationError {
            message: "could not determine the user config directory; pass --config".to_string(),
        })
}

/// Parse YAML content into EzbpConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<EzbpConfig> {
    if content.trim().is_empty() {
        return Ok(EzbpConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| EzbpError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load `config.yml` from `config_dir`, writing a commented default file
/// when none exists.
///
/// The returned config has an absolute `store_path` and a known
/// `default_ui`.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if `max_inclusions` is zero.
pub fn load_config(config_dir: &Path) -> Result<EzbpConfig> {
    let path = config_dir.join(CONFIG_FILE_NAME);

    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        parse_config(&content, &path)?
    } else {
        fs::create_dir_all(config_dir)?;
        fs::write(&path, DEFAULT_CONFIG)?;
        tracing::info!("Created default configuration at {}", path.display());
        parse_config(DEFAULT_CONFIG, &path)?
    };

    finalize(config, config_dir)
}

/// Resolve defaults that depend on the config directory and check values.
pub fn finalize(mut config: EzbpConfig, config_dir: &Path) -> Result<EzbpConfig> {
    if config.store_path.as_os_str().is_empty() {
        config.store_path = config_dir.join(STORE_FILE_NAME);
    } else if config.store_path.is_relative() {
        config.store_path = config_dir.join(&config.store_path);
    }

    if config.default_ui.parse::<UiKind>().is_err() {
        tracing::warn!(
            "Unknown default_ui '{}', using '{}'",
            config.default_ui,
            UiKind::Terminal
        );
        config.default_ui = UiKind::Terminal.to_string();
    }

    if config.max_inclusions == 0 {
        return Err(EzbpError::ConfigValidationError {
            message: "max_inclusions must be at least 1".to_string(),
        });
    }

    Ok(config)
}
