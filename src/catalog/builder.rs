//! Catalog build pipeline
//!
//! classify + expand -> rank reduction -> ranking -> destination names ->
//! requirement strings -> status report -> optional dump
//!
//! The result is an immutable [`SpellCatalog`]. Nothing here touches a
//! catalog that readers can already see.

use crate::catalog::category::SpellCategory;
use crate::catalog::classifier::Classifier;
use crate::catalog::dump;
use crate::catalog::entry::{Capability, CapabilityEntry};
use crate::catalog::expander::Expansion;
use crate::catalog::ranking;
use crate::catalog::reducer::{self, RankFilter};
use crate::catalog::requirements::{Requirements, CATEGORY_UNAVAILABLE, CLASS_UNAVAILABLE};
use crate::catalog::zones::ZoneNameResolver;
use crate::core::config::CatalogConfig;
use crate::core::error::Result;
use crate::core::types::PlayerClass;
use crate::spells::codes::FIRST_SPELL_ID;
use crate::spells::SpellTable;
use ahash::AHashMap;
use std::sync::Arc;

/// Classified, reduced and ranked spell lists, one per category
#[derive(Debug, Clone)]
pub struct SpellCatalog {
    generation: u64,
    rank_filter: RankFilter,
    lists: AHashMap<SpellCategory, Vec<CapabilityEntry>>,
    requirements: AHashMap<SpellCategory, Requirements>,
}

impl SpellCatalog {
    /// A catalog with no entries; every category reads as unavailable
    pub fn empty(generation: u64) -> Self {
        Self {
            generation,
            rank_filter: RankFilter::default(),
            lists: AHashMap::new(),
            requirements: AHashMap::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rank_filter(&self) -> RankFilter {
        self.rank_filter
    }

    /// Ranked entries for a category, best first
    pub fn entries(&self, category: SpellCategory) -> &[CapabilityEntry] {
        self.lists.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn requirements(&self, category: SpellCategory) -> Option<&Requirements> {
        self.requirements.get(&category)
    }

    /// "Who can do this" for a category
    pub fn requirement_summary(&self, category: SpellCategory) -> &str {
        self.requirements(category)
            .map(|req| req.summary.as_str())
            .unwrap_or(CATEGORY_UNAVAILABLE)
    }

    /// "Can my class do this" for a category
    pub fn requirement_for_class(&self, category: SpellCategory, class: PlayerClass) -> &str {
        self.requirements(category)
            .map(|req| req.for_class(class))
            .unwrap_or(CLASS_UNAVAILABLE)
    }

    pub fn total_entries(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }
}

/// Run the full pipeline against a spell table
///
/// Only a failed spell table is an error. A failed zone-name source leaves
/// the depart category empty and marked unavailable.
pub fn build_catalog(
    table: &dyn SpellTable,
    zones: &dyn ZoneNameResolver,
    config: &CatalogConfig,
    generation: u64,
) -> Result<SpellCatalog> {
    config.validate()?;

    let mut records = table.records().map_err(|e| {
        tracing::error!("Spell table unavailable, keeping previous catalog: {}", e);
        e
    })?;
    records.sort_by_key(|record| record.id);

    let classifier = Classifier::new(config.hard_level_cap);
    let mut expansion = Expansion::new();
    for record in records.into_iter().filter(|r| r.id.0 >= FIRST_SPELL_ID) {
        if let Some(classified) = classifier.classify(&record) {
            expansion.expand(Arc::new(record), classified);
        }
    }
    tracing::debug!("Expanded {} class entries", expansion.entry_count());

    let Expansion { mut lists, levels } = expansion;
    for category in SpellCategory::ALL {
        let list = lists.entry(category).or_default();
        let removed = reducer::reduce(list, config.rank_filter);
        if removed > 0 {
            tracing::debug!("Rank filter removed {} '{}' entries", removed, category);
        }
        ranking::rank(list, category, config.prefer_free_spells);
    }

    let departs_available = resolve_destinations(&mut lists, zones);

    let mut requirements = AHashMap::with_capacity(SpellCategory::ALL.len());
    for category in SpellCategory::ALL {
        let req = if category == SpellCategory::Depart && !departs_available {
            Requirements::unavailable()
        } else {
            levels
                .get(&category)
                .map(Requirements::from_levels)
                .unwrap_or_default()
        };
        requirements.insert(category, req);
    }

    let catalog = SpellCatalog {
        generation,
        rank_filter: config.rank_filter,
        lists,
        requirements,
    };

    status_report(&catalog);

    if let Some(path) = &config.dump_path {
        if let Err(e) = dump::write_dump_file(&catalog, path) {
            tracing::warn!("Failed to write spell dump to {}: {}", path.display(), e);
        }
    }

    Ok(catalog)
}

/// Attach long zone names to depart entries, dropping entries whose
/// destination is unknown. Returns false when the zone source failed.
fn resolve_destinations(
    lists: &mut AHashMap<SpellCategory, Vec<CapabilityEntry>>,
    zones: &dyn ZoneNameResolver,
) -> bool {
    let Some(departs) = lists.get_mut(&SpellCategory::Depart) else {
        return true;
    };
    if departs.is_empty() {
        return true;
    }

    let names = match zones.zone_names() {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Zone names unavailable, depart disabled: {}", e);
            departs.clear();
            return false;
        }
    };

    departs.retain_mut(|entry| match names.get(entry.teleport_zone()) {
        Some(long_name) => {
            entry.capability = Capability::Depart {
                long_name: long_name.clone(),
            };
            true
        }
        None => {
            tracing::debug!(
                "Dropping depart spell {} '{}': unknown zone '{}'",
                entry.id(),
                entry.name(),
                entry.teleport_zone()
            );
            false
        }
    });
    true
}

fn status_report(catalog: &SpellCatalog) {
    tracing::info!(
        "Spell catalog generation {} built with rank filter '{}': {} entries",
        catalog.generation,
        catalog.rank_filter,
        catalog.total_entries()
    );
    if catalog.is_empty() {
        tracing::error!("Spell catalog is empty");
        return;
    }
    for category in SpellCategory::ALL {
        tracing::debug!(
            "'{}' returned {} spells",
            category,
            catalog.entries(category).len()
        );
    }
}
