//! Configuration loading for ezbp.
//!
//! - Schema definitions in [`schema`]
//! - Directory discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use ezbp::config::{load_config, UiKind};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("config.yml"), "default_ui: fuzzy").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.ui_kind(), UiKind::Fuzzy);
//! assert_eq!(config.store_path, temp.path().join("boilerplates.yml"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    finalize, load_config, parse_config, resolve_config_dir, CONFIG_FILE_NAME, STORE_FILE_NAME,
};
pub use schema::{EzbpConfig, RofiConfig, UiKind};
