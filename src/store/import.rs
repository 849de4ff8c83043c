//! CSV import.
//!
//! The CSV file needs a header row with `name` and `value` columns. Other
//! columns are ignored.

use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::error::{EzbpError, Result};

use super::TemplateStore;

/// One row of an import file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportRecord {
    pub name: String,
    pub value: String,
}

/// What to do when an imported name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ConflictPolicy {
    /// Ask for each conflict.
    #[default]
    Ask,
    /// Keep the existing body.
    Keep,
    /// Overwrite with the imported body.
    Update,
}

/// Answer to a single name collision under [`ConflictPolicy::Ask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Keep this one.
    Keep,
    /// Overwrite this one.
    Update,
    /// Keep this and every later collision without asking.
    KeepAll,
    /// Overwrite this and every later collision without asking.
    UpdateAll,
}

/// Outcome counts of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub kept: usize,
    pub unchanged: usize,
    pub invalid: usize,
}

/// Read import records from a CSV file.
pub fn read_csv(path: &Path) -> Result<Vec<ImportRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let parse_error = |e: csv::Error| EzbpError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let headers = reader.headers().map_err(parse_error)?.clone();
    for column in ["name", "value"] {
        if !headers.iter().any(|h| h == column) {
            return Err(EzbpError::ConfigParseError {
                path: path.to_path_buf(),
                message: format!("missing '{}' column in header row", column),
            });
        }
    }

    reader
        .deserialize()
        .map(|row| row.map_err(parse_error))
        .collect()
}

/// Add `records` to `store`, resolving name collisions with `policy`.
///
/// Rows with an empty name or value are skipped and counted as invalid.
/// Under [`ConflictPolicy::Ask`], `ask` is called for each collision whose
/// body differs until it answers with one of the "all" choices.
pub fn import_templates<S, F>(
    store: &mut S,
    records: Vec<ImportRecord>,
    policy: ConflictPolicy,
    mut ask: F,
) -> Result<ImportSummary>
where
    S: TemplateStore + ?Sized,
    F: FnMut(&ImportRecord) -> Result<ConflictChoice>,
{
    let mut summary = ImportSummary::default();
    let mut policy = policy;

    for record in records {
        if record.name.trim().is_empty() || record.value.is_empty() {
            tracing::debug!("Skipping import row '{}' with empty name or value", record.name);
            summary.invalid += 1;
            continue;
        }

        let Some(existing) = store.get(&record.name) else {
            store.create(&record.name, &record.value)?;
            summary.created += 1;
            continue;
        };

        if existing.body == record.value {
            summary.unchanged += 1;
            continue;
        }

        let overwrite = match policy {
            ConflictPolicy::Keep => false,
            ConflictPolicy::Update => true,
            ConflictPolicy::Ask => match ask(&record)? {
                ConflictChoice::Keep => false,
                ConflictChoice::Update => true,
                ConflictChoice::KeepAll => {
                    policy = ConflictPolicy::Keep;
                    false
                }
                ConflictChoice::UpdateAll => {
                    policy = ConflictPolicy::Update;
                    true
                }
            },
        };

        if overwrite {
            store.update(&record.name, &record.value)?;
            summary.updated += 1;
        } else {
            summary.kept += 1;
        }
    }

    tracing::info!(
        created = summary.created,
        updated = summary.updated,
        kept = summary.kept,
        "Import finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn record(name: &str, value: &str) -> ImportRecord {
        ImportRecord {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn write_csv(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("import.csv");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn never_asked(record: &ImportRecord) -> Result<ConflictChoice> {
        panic!("unexpected conflict prompt for '{}'", record.name)
    }

    #[test]
    fn reads_rows_by_header_name() {
        let (_temp, path) = write_csv("value,name\n\"Hello, {{who}}\",hello\nBye,bye\n");
        let records = read_csv(&path).unwrap();
        assert_eq!(
            records,
            vec![record("hello", "Hello, {{who}}"), record("bye", "Bye")]
        );
    }

    #[test]
    fn reads_multiline_values() {
        let (_temp, path) = write_csv("name,value\nletter,\"Dear {{Name}},\nThanks\"\n");
        let records = read_csv(&path).unwrap();
        assert_eq!(records[0].value, "Dear {{Name}},\nThanks");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let (_temp, path) = write_csv("name,value,count\nsig,-- me,12\n");
        let records = read_csv(&path).unwrap();
        assert_eq!(records, vec![record("sig", "-- me")]);
    }

    #[test]
    fn missing_column_is_reported() {
        let (_temp, path) = write_csv("name,body\nsig,-- me\n");
        let err = read_csv(&path).unwrap_err();
        assert!(err.to_string().contains("value"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = read_csv(&temp.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, EzbpError::Io(_)));
    }

    #[test]
    fn creates_new_records() {
        let mut store = MemoryStore::new();
        let summary = import_templates(
            &mut store,
            vec![record("a", "1"), record("b", "2")],
            ConflictPolicy::Ask,
            never_asked,
        )
        .unwrap();

        assert_eq!(summary.created, 2);
        assert_eq!(store.lookup("b"), Some("2".to_string()));
    }

    #[test]
    fn identical_bodies_are_unchanged() {
        let mut store = MemoryStore::from_pairs([("a", "1")]);
        let summary =
            import_templates(&mut store, vec![record("a", "1")], ConflictPolicy::Ask, never_asked)
                .unwrap();
        assert_eq!(summary.unchanged, 1);
    }

    #[test]
    fn keep_policy_preserves_existing() {
        let mut store = MemoryStore::from_pairs([("a", "old")]);
        let summary =
            import_templates(&mut store, vec![record("a", "new")], ConflictPolicy::Keep, never_asked)
                .unwrap();
        assert_eq!(summary.kept, 1);
        assert_eq!(store.lookup("a"), Some("old".to_string()));
    }

    #[test]
    fn update_policy_overwrites() {
        let mut store = MemoryStore::from_pairs([("a", "old")]);
        let summary = import_templates(
            &mut store,
            vec![record("a", "new")],
            ConflictPolicy::Update,
            never_asked,
        )
        .unwrap();
        assert_eq!(summary.updated, 1);
        assert_eq!(store.lookup("a"), Some("new".to_string()));
    }

    #[test]
    fn ask_policy_asks_per_conflict() {
        let mut store = MemoryStore::from_pairs([("a", "old a"), ("b", "old b")]);
        let mut asked = Vec::new();

        let summary = import_templates(
            &mut store,
            vec![record("a", "new a"), record("b", "new b")],
            ConflictPolicy::Ask,
            |r: &ImportRecord| {
                asked.push(r.name.clone());
                Ok(if r.name == "a" {
                    ConflictChoice::Update
                } else {
                    ConflictChoice::Keep
                })
            },
        )
        .unwrap();

        assert_eq!(asked, vec!["a", "b"]);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.kept, 1);
        assert_eq!(store.lookup("a"), Some("new a".to_string()));
        assert_eq!(store.lookup("b"), Some("old b".to_string()));
    }

    #[test]
    fn update_all_stops_asking() {
        let mut store = MemoryStore::from_pairs([("a", "old"), ("b", "old")]);
        let mut asked = 0;

        let summary = import_templates(
            &mut store,
            vec![record("a", "new"), record("b", "new")],
            ConflictPolicy::Ask,
            |_: &ImportRecord| {
                asked += 1;
                Ok(ConflictChoice::UpdateAll)
            },
        )
        .unwrap();

        assert_eq!(summary.updated, 2);
        assert_eq!(asked, 1);
    }

    #[test]
    fn ask_error_aborts_import() {
        let mut store = MemoryStore::from_pairs([("a", "old")]);
        let err = import_templates(
            &mut store,
            vec![record("a", "new"), record("b", "fresh")],
            ConflictPolicy::Ask,
            |r: &ImportRecord| {
                Err(EzbpError::Cancelled {
                    label: r.name.clone(),
                })
            },
        )
        .unwrap_err();

        assert!(matches!(err, EzbpError::Cancelled { .. }));
        assert!(!store.contains("b"));
    }

    #[test]
    fn invalid_rows_are_skipped() {
        let mut store = MemoryStore::new();
        let summary = import_templates(
            &mut store,
            vec![record("", "x"), record("y", ""), record("ok", "fine")],
            ConflictPolicy::Ask,
            never_asked,
        )
        .unwrap();
        assert_eq!(summary.invalid, 2);
        assert_eq!(summary.created, 1);
    }
}
