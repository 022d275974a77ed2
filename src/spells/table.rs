//! Raw spell table providers
//!
//! The catalog never owns the spell table. It asks a [`SpellTable`] for the
//! full record list once per build and classifies what comes back.

use crate::core::error::{CatalogError, Result};
use crate::spells::record::RawSpellRecord;
use std::path::{Path, PathBuf};

/// Source of raw spell records
pub trait SpellTable {
    /// All records, in any order. Failure aborts the build.
    fn records(&self) -> Result<Vec<RawSpellRecord>>;
}

/// Spell table held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySpellTable {
    records: Vec<RawSpellRecord>,
}

impl InMemorySpellTable {
    pub fn new(records: Vec<RawSpellRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: RawSpellRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SpellTable for InMemorySpellTable {
    fn records(&self) -> Result<Vec<RawSpellRecord>> {
        Ok(self.records.clone())
    }
}

/// Spell table read from a JSON array of records on every build
#[derive(Debug, Clone)]
pub struct JsonSpellTable {
    path: PathBuf,
}

impl JsonSpellTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse records from JSON text
    pub fn parse(content: &str) -> Result<Vec<RawSpellRecord>> {
        Ok(serde_json::from_str(content)?)
    }
}

impl SpellTable for JsonSpellTable {
    fn records(&self) -> Result<Vec<RawSpellRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::SpellTableUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        Self::parse(&content).map_err(|e| {
            CatalogError::SpellTableUnavailable(format!("{}: {}", self.path.display(), e))
        })
    }
}
