//! In-memory boilerplate store.

use std::collections::BTreeMap;

use crate::error::{EzbpError, Result};

use super::{validate_body, validate_name, Boilerplate, TemplateStore};

/// A [`TemplateStore`] backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    templates: BTreeMap<String, Boilerplate>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(name, body)` pairs.
    ///
    /// Later pairs replace earlier ones with the same name.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let templates = pairs
            .into_iter()
            .map(|(name, body)| (name.to_string(), Boilerplate::new(name, body)))
            .collect();
        Self { templates }
    }

    /// Build a store from full records.
    pub fn from_records(records: impl IntoIterator<Item = Boilerplate>) -> Self {
        let templates = records
            .into_iter()
            .map(|bp| (bp.name.clone(), bp))
            .collect();
        Self { templates }
    }

    /// Usage count of `name`, if it exists.
    pub fn usage_count(&self, name: &str) -> Option<u64> {
        self.templates.get(name).map(|bp| bp.usage_count)
    }

    /// Number of stored boilerplates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Boilerplate> {
        self.templates.values()
    }
}

impl TemplateStore for MemoryStore {
    fn lookup(&self, name: &str) -> Option<String> {
        self.templates.get(name).map(|bp| bp.body.clone())
    }

    fn get(&self, name: &str) -> Option<Boilerplate> {
        self.templates.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn list(&self) -> Vec<Boilerplate> {
        let mut all: Vec<_> = self.templates.values().cloned().collect();
        all.sort_by(Boilerplate::by_popularity);
        all
    }

    fn create(&mut self, name: &str, body: &str) -> Result<()> {
        validate_name(name)?;
        validate_body(name, body)?;
        if self.templates.contains_key(name) {
            return Err(EzbpError::AlreadyExists {
                name: name.to_string(),
            });
        }
        self.templates
            .insert(name.to_string(), Boilerplate::new(name, body));
        Ok(())
    }

    fn update(&mut self, name: &str, body: &str) -> Result<()> {
        validate_name(name)?;
        validate_body(name, body)?;
        let bp = self
            .templates
            .get_mut(name)
            .ok_or_else(|| EzbpError::TemplateNotFound {
                name: name.to_string(),
            })?;
        bp.body = body.to_string();
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        self.templates
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| EzbpError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    fn increment_usage(&mut self, name: &str) -> Result<()> {
        let bp = self
            .templates
            .get_mut(name)
            .ok_or_else(|| EzbpError::TemplateNotFound {
                name: name.to_string(),
            })?;
        bp.record_use();
        Ok(())
    }
}
