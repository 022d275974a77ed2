//! Destination zone names for depart spells

use crate::core::error::{CatalogError, Result};
use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

/// Maps zone short names to their long display names
pub trait ZoneNameResolver {
    /// All known zones. Failure empties the depart category for this build.
    fn zone_names(&self) -> Result<AHashMap<String, String>>;
}

#[derive(Debug, Default, Deserialize)]
struct ZoneFile {
    #[serde(default)]
    zones: AHashMap<String, String>,
}

/// Zone names held in memory, optionally loaded from TOML:
///
/// ```toml
/// [zones]
/// nro = "Northern Desert of Ro"
/// commons = "West Commonlands"
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZoneDirectory {
    names: AHashMap<String, String>,
}

impl ZoneDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zone; entries with an empty short or long name are ignored
    pub fn insert(&mut self, short_name: impl Into<String>, long_name: impl Into<String>) {
        let short_name = short_name.into();
        let long_name = long_name.into();
        if short_name.is_empty() || long_name.is_empty() {
            return;
        }
        self.names.insert(short_name, long_name);
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ZoneFile = toml::from_str(content)?;
        let mut directory = Self::new();
        for (short_name, long_name) in file.zones {
            directory.insert(short_name, long_name);
        }
        Ok(directory)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::ZoneNamesUnavailable(format!("{}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn long_name(&self, short_name: &str) -> Option<&str> {
        self.names.get(short_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ZoneNameResolver for ZoneDirectory {
    fn zone_names(&self) -> Result<AHashMap<String, String>> {
        Ok(self.names.clone())
    }
}
