//! Boilerplate storage.
//!
//! The expansion engine only needs [`TemplateStore::lookup`] and
//! [`TemplateStore::increment_usage`]; the rest of the trait backs the
//! management commands.
//!
//! - [`MemoryStore`] keeps everything in memory (tests, embedding)
//! - [`FileStore`] persists to a YAML file after every change
//! - [`import`] reads boilerplates from CSV files

pub mod file;
pub mod import;
pub mod memory;
pub mod record;

pub use file::FileStore;
pub use import::{
    import_templates, read_csv, ConflictChoice, ConflictPolicy, ImportRecord, ImportSummary,
};
pub use memory::MemoryStore;
pub use record::Boilerplate;

use crate::error::{EzbpError, Result};

/// Storage for named boilerplates.
pub trait TemplateStore {
    /// Raw body of the boilerplate called `name`.
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(|bp| bp.body)
    }

    /// Full record for `name`.
    fn get(&self, name: &str) -> Option<Boilerplate>;

    /// Check whether `name` exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All records, most used first.
    fn list(&self) -> Vec<Boilerplate>;

    /// Add a new boilerplate. Fails if the name is taken.
    fn create(&mut self, name: &str, body: &str) -> Result<()>;

    /// Replace the body of an existing boilerplate.
    fn update(&mut self, name: &str, body: &str) -> Result<()>;

    /// Remove a boilerplate.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Count one top-level expansion of `name`.
    fn increment_usage(&mut self, name: &str) -> Result<()>;
}

impl<T: TemplateStore + ?Sized> TemplateStore for &mut T {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }

    fn get(&self, name: &str) -> Option<Boilerplate> {
        (**self).get(name)
    }

    fn contains(&self, name: &str) -> bool {
        (**self).contains(name)
    }

    fn list(&self) -> Vec<Boilerplate> {
        (**self).list()
    }

    fn create(&mut self, name: &str, body: &str) -> Result<()> {
        (**self).create(name, body)
    }

    fn update(&mut self, name: &str, body: &str) -> Result<()> {
        (**self).update(name, body)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        (**self).delete(name)
    }

    fn increment_usage(&mut self, name: &str) -> Result<()> {
        (**self).increment_usage(name)
    }
}

/// Reject empty names.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EzbpError::InvalidTemplate {
            message: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Reject empty bodies.
pub fn validate_body(name: &str, body: &str) -> Result<()> {
    if body.is_empty() {
        return Err(EzbpError::InvalidTemplate {
            message: format!("body of '{}' must not be empty", name),
        });
    }
    Ok(())
}
