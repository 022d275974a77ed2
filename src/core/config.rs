//! Catalog build configuration
//!
//! Every knob that changes what the build pipeline produces lives here, with
//! the defaults the live server runs with. Values can be overridden from a
//! TOML file; missing keys keep their defaults.

use crate::catalog::reducer::RankFilter;
use crate::core::error::{CatalogError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Level slots above this value mark a spell as unusable by the class
pub const DEFAULT_HARD_LEVEL_CAP: u8 = 127;

/// Configuration for the catalog build pipeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Which rank tier of reprinted spells survives the redundancy pass
    ///
    /// `rank_one` keeps only the base spell; `rank_two` and `rank_three`
    /// keep the named tier and drop the reprints it supersedes.
    pub rank_filter: RankFilter,

    /// Highest class level slot that still counts as "usable"
    ///
    /// Spell data marks unusable classes with 255 (and occasionally 254),
    /// so anything above the server's hard cap is treated as absent.
    pub hard_level_cap: u8,

    /// Rank zero-cost bind spells ahead of everything else
    pub prefer_free_spells: bool,

    /// Where to write the diagnostic dump after each build
    ///
    /// Off by default. The dump is a read-only side channel; failure to
    /// write it never fails the build.
    pub dump_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rank_filter: RankFilter::default(),
            hard_level_cap: DEFAULT_HARD_LEVEL_CAP,
            prefer_free_spells: true,
            dump_path: None,
        }
    }
}

impl CatalogConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CatalogConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.hard_level_cap == 0 {
            return Err(CatalogError::Config(
                "hard_level_cap must be at least 1".into(),
            ));
        }

        if let Some(path) = &self.dump_path {
            if path.as_os_str().is_empty() {
                return Err(CatalogError::Config("dump_path must not be empty".into()));
            }
        }

        Ok(())
    }
}
