//! YAML-backed boilerplate store.
//!
//! The whole collection lives in one YAML document:
//!
//! ```yaml
//! version: 1
//! templates:
//!   signature:
//!     body: "-- {{Name}}"
//!     usage_count: 4
//!     last_used: 2026-10-18T09:12:44Z
//! ```
//!
//! It is read once on [`FileStore::open`] and rewritten after every change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EzbpError, Result};

use super::{Boilerplate, MemoryStore, TemplateStore};

/// On-disk layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    #[serde(default)]
    templates: BTreeMap<String, StoredTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTemplate {
    body: String,
    #[serde(default)]
    usage_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_used: Option<DateTime<Utc>>,
}

/// A [`TemplateStore`] persisted to a YAML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No store at {}, starting empty", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                inner: MemoryStore::new(),
            });
        }

        let content = fs::read_to_string(path)?;
        let doc: StoreDocument =
            serde_yaml::from_str(&content).map_err(|e| EzbpError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if doc.version > Self::CURRENT_VERSION {
            return Err(EzbpError::ConfigParseError {
                path: path.to_path_buf(),
                message: format!(
                    "store version {} is newer than supported version {}",
                    doc.version,
                    Self::CURRENT_VERSION
                ),
            });
        }

        let records = doc.templates.into_iter().map(|(name, t)| Boilerplate {
            name,
            body: t.body,
            usage_count: t.usage_count,
            last_used: t.last_used,
        });

        let inner = MemoryStore::from_records(records);
        tracing::debug!("Loaded {} boilerplates from {}", inner.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the store to disk using atomic write.
    ///
    /// Writes to a temp file next to the target, then renames it over.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let doc = StoreDocument {
            version: Self::CURRENT_VERSION,
            templates: self
                .inner
                .records()
                .map(|bp| {
                    (
                        bp.name.clone(),
                        StoredTemplate {
                            body: bp.body.clone(),
                            usage_count: bp.usage_count,
                            last_used: bp.last_used,
                        },
                    )
                })
                .collect(),
        };

        let content = serde_yaml::to_string(&doc).map_err(|e| EzbpError::ConfigValidationError {
            message: format!("Failed to serialize store: {}", e),
        })?;

        let temp_path = self.path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved {} boilerplates to {}", self.inner.len(), self.path.display());
        Ok(())
    }
}

impl FileStore {
    /// Apply `change` and save. On any failure the in-memory state is rolled
    /// back, so memory never holds a change the file does not.
    fn commit(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<()>) -> Result<()> {
        let snapshot = self.inner.clone();
        let result = change(&mut self.inner).and_then(|()| self.save());
        if result.is_err() {
            self.inner = snapshot;
        }
        result
    }
}

impl TemplateStore for FileStore {
    fn lookup(&self, name: &str) -> Option<String> {
        self.inner.lookup(name)
    }

    fn get(&self, name: &str) -> Option<Boilerplate> {
        self.inner.get(name)
    }

    fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    fn list(&self) -> Vec<Boilerplate> {
        self.inner.list()
    }

    fn create(&mut self, name: &str, body: &str) -> Result<()> {
        self.commit(|inner| inner.create(name, body))
    }

    fn update(&mut self, name: &str, body: &str) -> Result<()> {
        self.commit(|inner| inner.update(name, body))
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.commit(|inner| inner.delete(name))
    }

    fn increment_usage(&mut self, name: &str) -> Result<()> {
        self.commit(|inner| inner.increment_usage(name))
    }
}
