//! Per-class expansion of classified spells

use crate::catalog::category::SpellCategory;
use crate::catalog::classifier::Classification;
use crate::catalog::entry::CapabilityEntry;
use crate::core::types::PlayerClass;
use crate::spells::RawSpellRecord;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Lowest level at which each class gains access to a category
pub type LevelMap = BTreeMap<PlayerClass, u8>;

/// Candidate lists and level maps produced by expansion
#[derive(Debug, Default)]
pub struct Expansion {
    pub lists: AHashMap<SpellCategory, Vec<CapabilityEntry>>,
    pub levels: AHashMap<SpellCategory, LevelMap>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry per qualifying class and fold the class levels into
    /// the category's level map
    pub fn expand(&mut self, record: Arc<RawSpellRecord>, classified: Classification) {
        let category = classified.capability.category();
        let list = self.lists.entry(category).or_default();
        let levels = self.levels.entry(category).or_default();

        for (class, level) in classified.class_levels {
            list.push(CapabilityEntry {
                record: Arc::clone(&record),
                capability: classified.capability.clone(),
                shape: classified.shape,
                class,
                level,
            });

            levels
                .entry(class)
                .and_modify(|known| *known = (*known).min(level))
                .or_insert(level);
        }
    }

    pub fn entry_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}
