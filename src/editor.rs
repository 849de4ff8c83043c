//! External editor integration for `add` and `edit`.
//!
//! The editor command is run through the shell with the file path as its
//! last argument, so values like `code --wait` work.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::error::{EzbpError, Result};

#[cfg(windows)]
const FALLBACK_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const FALLBACK_EDITOR: &str = "nano";

/// Choose an editor: configured, then `$VISUAL`, then `$EDITOR`, then a
/// platform default. Blank values are skipped.
pub fn resolve_editor_from(
    configured: Option<&str>,
    visual: Option<&str>,
    editor: Option<&str>,
) -> String {
    [configured, visual, editor]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|e| !e.is_empty())
        .unwrap_or(FALLBACK_EDITOR)
        .to_string()
}

/// Choose an editor using the process environment.
pub fn resolve_editor(configured: Option<&str>) -> String {
    let visual = std::env::var("VISUAL").ok();
    let editor = std::env::var("EDITOR").ok();
    resolve_editor_from(configured, visual.as_deref(), editor.as_deref())
}

/// Open `initial` in `editor` and return the saved content verbatim.
pub fn edit(editor: &str, initial: &str) -> Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix("ezbp-")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(initial.as_bytes())?;
    file.flush()?;

    run_editor(editor, file.path())?;

    // Read by path: some editors replace the file instead of writing in place.
    Ok(fs::read_to_string(file.path())?)
}

fn run_editor(editor: &str, path: &Path) -> Result<()> {
    tracing::debug!("Launching editor '{}' on {}", editor, path.display());

    let status = editor_command(editor, path)
        .status()
        .map_err(|e| EzbpError::EditorFailed {
            editor: editor.to_string(),
            message: e.to_string(),
        })?;

    if !status.success() {
        return Err(EzbpError::EditorFailed {
            editor: editor.to_string(),
            message: status.to_string(),
        });
    }
    Ok(())
}

#[cfg(not(windows))]
fn editor_command(editor: &str, path: &Path) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(format!("{} \"$@\"", editor))
        .arg("ezbp-editor")
        .arg(path);
    cmd
}

#[cfg(windows)]
fn editor_command(editor: &str, path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(editor).arg(path);
    cmd
}
