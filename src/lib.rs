//! ezbp - Expand stored boilerplates with includes and prompts.
//!
//! A boilerplate is a named piece of text. Its body may pull in other
//! boilerplates with `[[name]]` and ask the user for values with
//! `{{Label}}` or `{{Label|choice1|choice2}}`. Expansion repeats until no
//! reference is left.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`editor`] - External editor integration
//! - [`engine`] - Reference scanning and expansion
//! - [`error`] - Error types and result aliases
//! - [`store`] - Boilerplate storage and CSV import
//! - [`ui`] - Prompt front-ends and terminal output
//!
//! # Example
//!
//! ```
//! use ezbp::engine::Expander;
//! use ezbp::store::MemoryStore;
//! use ezbp::ui::MockUI;
//!
//! let store = MemoryStore::from_pairs([
//!     ("letter", "Dear {{Name}},\n[[sig]]"),
//!     ("sig", "Regards"),
//! ]);
//! let mut ui = MockUI::new();
//! ui.set_text("Name", "Ada");
//!
//! let mut expander = Expander::new(store);
//! let text = expander.expand("letter", &mut ui).unwrap();
//! assert_eq!(text, "Dear Ada,\nRegards");
//! ```

pub mod cli;
pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod store;
pub mod ui;

pub use error::{EzbpError, Result};
