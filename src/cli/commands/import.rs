//! Import command implementation.
//!
//! The `ezbp import` command loads boilerplates from a CSV file with
//! `name` and `value` columns.

use crate::cli::args::ImportArgs;
use crate::config::EzbpConfig;
use crate::error::{EzbpError, Result};
use crate::store::{
    import_templates, read_csv, ConflictChoice, ConflictPolicy, ImportRecord, ImportSummary,
};
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    config: EzbpConfig,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(config: EzbpConfig, args: ImportArgs) -> Self {
        Self { config, args }
    }
}

const KEEP: &str = "Keep existing";
const UPDATE: &str = "Update";
const KEEP_ALL: &str = "Keep all";
const UPDATE_ALL: &str = "Update all";

/// Ask how to resolve one name collision.
fn ask_conflict(ui: &mut dyn UserInterface, record: &ImportRecord) -> Result<ConflictChoice> {
    if !ui.is_interactive() {
        return Err(EzbpError::ConfigValidationError {
            message: format!(
                "'{}' already exists; pass --on-conflict keep or --on-conflict update",
                record.name
            ),
        });
    }

    let label = format!("Boilerplate '{}' already exists", record.name);
    let choices = [KEEP, UPDATE, KEEP_ALL, UPDATE_ALL].map(String::from);
    match ui.select_one(&label, &choices)?.as_str() {
        UPDATE => Ok(ConflictChoice::Update),
        KEEP_ALL => Ok(ConflictChoice::KeepAll),
        UPDATE_ALL => Ok(ConflictChoice::UpdateAll),
        _ => Ok(ConflictChoice::Keep),
    }
}

fn describe(summary: &ImportSummary) -> String {
    let mut parts = vec![
        format!("{} added", summary.created),
        format!("{} updated", summary.updated),
    ];
    if summary.kept > 0 {
        parts.push(format!("{} kept", summary.kept));
    }
    if summary.unchanged > 0 {
        parts.push(format!("{} unchanged", summary.unchanged));
    }
    if summary.invalid > 0 {
        parts.push(format!("{} skipped", summary.invalid));
    }
    format!("Imported: {}", parts.join(", "))
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let records = read_csv(&self.args.file)?;
        tracing::debug!(rows = records.len(), file = %self.args.file.display(), "Read import file");

        let mut store = open_store(&self.config)?;
        let summary = import_templates(&mut store, records, self.args.on_conflict, |record| {
            ask_conflict(ui, record)
        })?;

        ui.success(&describe(&summary));
        if summary.invalid > 0 {
            ui.warning(&format!(
                "Skipped {} row(s) with an empty name or value",
                summary.invalid
            ));
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
