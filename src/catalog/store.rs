//! Swappable handle to the live catalog
//!
//! Readers take an `Arc` snapshot and keep using it for as long as they
//! like. A rebuild happens entirely off to the side and is published with a
//! single pointer swap, so no reader ever sees a half-built catalog.

use crate::catalog::builder::{build_catalog, SpellCatalog};
use crate::catalog::zones::ZoneNameResolver;
use crate::core::config::CatalogConfig;
use crate::core::error::Result;
use crate::spells::SpellTable;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

pub struct CatalogStore {
    current: RwLock<Arc<SpellCatalog>>,
    next_generation: AtomicU64,
}

impl CatalogStore {
    /// Start with an empty catalog (generation 0)
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(SpellCatalog::empty(0))),
            next_generation: AtomicU64::new(1),
        }
    }

    /// The catalog as of now
    pub fn snapshot(&self) -> Arc<SpellCatalog> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Build a new catalog and publish it
    ///
    /// Safe to call repeatedly and from several threads. On error the
    /// previous catalog stays live. A build that finishes after a newer one
    /// has been published is returned but never goes live.
    pub fn load(
        &self,
        table: &dyn SpellTable,
        zones: &dyn ZoneNameResolver,
        config: &CatalogConfig,
    ) -> Result<Arc<SpellCatalog>> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let catalog = Arc::new(build_catalog(table, zones, config, generation)?);
        self.publish(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Replace the live catalog with an empty one
    pub fn unload(&self) {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        self.publish(Arc::new(SpellCatalog::empty(generation)));
        tracing::info!("Spell catalog unloaded");
    }

    /// Swap in `catalog` unless a newer generation is already live
    fn publish(&self, catalog: Arc<SpellCatalog>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if catalog.generation() <= current.generation() {
            tracing::debug!(
                "Discarding catalog generation {}: generation {} is already live",
                catalog.generation(),
                current.generation()
            );
            return;
        }
        *current = catalog;
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::category::SpellCategory;
    use crate::catalog::requirements::CATEGORY_UNAVAILABLE;
    use crate::catalog::zones::ZoneDirectory;
    use crate::core::error::CatalogError;
    use crate::core::types::PlayerClass;
    use crate::spells::codes::{effect, target};
    use crate::spells::{EffectSlot, InMemorySpellTable, RawSpellRecord};
    use std::sync::{mpsc, Mutex};
    use std::thread;

    struct BrokenTable;

    impl SpellTable for BrokenTable {
        fn records(&self) -> Result<Vec<RawSpellRecord>> {
            Err(CatalogError::SpellTableUnavailable("offline".into()))
        }
    }

    /// Blocks inside `records()` until released
    struct GatedTable {
        inner: InMemorySpellTable,
        entered: Mutex<mpsc::Sender<()>>,
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl SpellTable for GatedTable {
        fn records(&self) -> Result<Vec<RawSpellRecord>> {
            self.entered.lock().unwrap().send(()).unwrap();
            self.release.lock().unwrap().recv().unwrap();
            self.inner.records()
        }
    }

    fn table() -> InMemorySpellTable {
        InMemorySpellTable::new(vec![RawSpellRecord::new(35, "Bind Affinity")
            .with_target(target::TARGET, 0)
            .with_class_level(PlayerClass::Cleric, 14)
            .with_effect(1, EffectSlot::new(effect::BIND_AFFINITY, 0, 0))])
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CatalogStore::new();
        let catalog = store.snapshot();
        assert_eq!(catalog.generation(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_publishes_new_generation() {
        let store = CatalogStore::new();
        let first = store
            .load(&table(), &ZoneDirectory::new(), &CatalogConfig::default())
            .unwrap();
        let second = store
            .load(&table(), &ZoneDirectory::new(), &CatalogConfig::default())
            .unwrap();

        assert!(second.generation() > first.generation());
        assert_eq!(store.snapshot().generation(), second.generation());
        assert_eq!(first.entries(SpellCategory::BindAffinity).len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_previous_catalog() {
        let store = CatalogStore::new();
        let good = store
            .load(&table(), &ZoneDirectory::new(), &CatalogConfig::default())
            .unwrap();

        assert!(store
            .load(&BrokenTable, &ZoneDirectory::new(), &CatalogConfig::default())
            .is_err());
        assert_eq!(store.snapshot().generation(), good.generation());
        assert_eq!(store.snapshot().total_entries(), 1);
    }

    #[test]
    fn test_old_snapshot_survives_reload() {
        let store = CatalogStore::new();
        let old = store
            .load(&table(), &ZoneDirectory::new(), &CatalogConfig::default())
            .unwrap();
        store.unload();

        assert_eq!(old.entries(SpellCategory::BindAffinity).len(), 1);
        let now = store.snapshot();
        assert!(now.is_empty());
        assert_eq!(
            now.requirement_summary(SpellCategory::BindAffinity),
            CATEGORY_UNAVAILABLE
        );
    }

    #[test]
    fn test_slow_older_load_never_replaces_newer_catalog() {
        let store = CatalogStore::new();
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let gated = GatedTable {
            inner: table(),
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        };

        thread::scope(|s| {
            let slow = s.spawn(|| {
                store.load(&gated, &ZoneDirectory::new(), &CatalogConfig::default())
            });
            entered_rx.recv().unwrap();

            let fast = store
                .load(&InMemorySpellTable::default(), &ZoneDirectory::new(), &CatalogConfig::default())
                .unwrap();
            assert_eq!(fast.generation(), 2);
            assert_eq!(store.snapshot().generation(), 2);

            release_tx.send(()).unwrap();
            let slow = slow.join().unwrap().unwrap();
            assert_eq!(slow.generation(), 1);
            assert_eq!(slow.total_entries(), 1);
        });

        let live = store.snapshot();
        assert_eq!(live.generation(), 2);
        assert!(live.is_empty());
    }

    #[test]
    fn test_unload_after_stale_load_stays_newest() {
        let store = CatalogStore::new();
        store.unload();
        let stale = Arc::new(SpellCatalog::empty(0));
        store.publish(stale);
        assert_eq!(store.snapshot().generation(), 1);
    }
}
