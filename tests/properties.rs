//! Property tests for ranking, reduction and selection laws

use botcast::catalog::ranking::{compare_by, rank, sequence};
use botcast::catalog::reducer::{reduce, RankTier};
use botcast::catalog::{
    build_catalog, Capability, CapabilityEntry, RankFilter, SpellCategory, ZoneDirectory,
};
use botcast::core::{CatalogConfig, PlayerClass};
use botcast::select::{select, zone_allows, Actor, SelectionRequest, TargetDescriptor};
use botcast::spells::codes::{effect, target};
use botcast::spells::{EffectSlot, InMemorySpellTable, RawSpellRecord, TargetShape};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

const NAMES: [&str; 6] = [
    "Levitate",
    "levitate",
    "Dead Man Floating",
    "Spirit of Eagle",
    "Spirit of Eagle Rk. II",
    "Spirit of Eagle Rk. III",
];

const SHAPES: [TargetShape; 3] = [
    TargetShape::Single,
    TargetShape::GroupCaster,
    TargetShape::AeCaster,
];

type EntrySeed = (usize, usize, u8, i32, usize);

fn entry_seed() -> impl Strategy<Value = EntrySeed> {
    (0..PlayerClass::ALL.len(), 0..NAMES.len(), 1u8..70, 0i32..4, 0..SHAPES.len())
}

/// Entry ids carry the insertion index so stability can be observed
fn entries(seeds: &[EntrySeed]) -> Vec<CapabilityEntry> {
    seeds
        .iter()
        .enumerate()
        .map(|(index, &(class, name, level, zone_type, shape))| CapabilityEntry {
            record: Arc::new(
                RawSpellRecord::new(index as u32 + 2, NAMES[name]).with_zone_type(zone_type),
            ),
            capability: Capability::Levitation,
            shape: SHAPES[shape],
            class: PlayerClass::ALL[class],
            level,
        })
        .collect()
}

fn ids(list: &[CapabilityEntry]) -> Vec<u32> {
    list.iter().map(|e| e.id().0).collect()
}

const EFFECTS: [i32; 6] = [
    effect::LEVITATE,
    effect::CHARM,
    effect::BIND_AFFINITY,
    effect::WATER_BREATHING,
    effect::TELEPORT,
    effect::RUNE,
];

fn table(seeds: &[(usize, usize, u8, usize)]) -> InMemorySpellTable {
    InMemorySpellTable::new(
        seeds
            .iter()
            .enumerate()
            .map(|(index, &(effect_index, class, level, name))| {
                RawSpellRecord::new(index as u32 + 2, NAMES[name])
                    .with_target(target::TARGET, 0)
                    .with_class_level(PlayerClass::ALL[class], level)
                    .with_effect(1, EffectSlot::new(EFFECTS[effect_index], 0, 50))
                    .with_teleport_zone("nro")
            })
            .collect(),
    )
}

proptest! {
    #[test]
    fn property_ranking_is_idempotent(seeds in prop::collection::vec(entry_seed(), 0..40)) {
        let mut once = entries(&seeds);
        rank(&mut once, SpellCategory::Levitation, true);
        let mut twice = once.clone();
        rank(&mut twice, SpellCategory::Levitation, true);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn property_last_key_is_primary_and_ties_keep_order(
        seeds in prop::collection::vec(entry_seed(), 0..40)
    ) {
        let keys = sequence(SpellCategory::Levitation, false);
        let (primary, tie_breakers) = keys.split_last().unwrap();

        let mut ranked = entries(&seeds);
        rank(&mut ranked, SpellCategory::Levitation, false);

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match primary.compare(a, b) {
                Ordering::Less => {}
                Ordering::Greater => prop_assert!(false, "primary key out of order"),
                Ordering::Equal => match compare_by(tie_breakers, a, b) {
                    Ordering::Less => {}
                    Ordering::Greater => prop_assert!(false, "tie-breaker out of order"),
                    Ordering::Equal => prop_assert!(a.id() < b.id(), "unstable sort"),
                },
            }
        }
    }

    #[test]
    fn property_rank_one_keeps_only_base_spells(
        seeds in prop::collection::vec(entry_seed(), 0..40)
    ) {
        let mut list = entries(&seeds);
        let before = list.len();
        let dropped = reduce(&mut list, RankFilter::RankOne);
        prop_assert_eq!(before - dropped, list.len());
        prop_assert!(list.iter().all(|e| RankTier::of(e.name()) == RankTier::One));
    }

    #[test]
    fn property_rank_two_never_keeps_rank_three(
        seeds in prop::collection::vec(entry_seed(), 0..40)
    ) {
        let mut list = entries(&seeds);
        reduce(&mut list, RankFilter::RankTwo);
        prop_assert!(list.iter().all(|e| RankTier::of(e.name()) != RankTier::Three));
        if list.iter().any(|e| e.name() == "Spirit of Eagle Rk. II") {
            prop_assert!(list.iter().all(|e| e.name() != "Spirit of Eagle"));
        }
    }

    #[test]
    fn property_build_is_deterministic(
        seeds in prop::collection::vec(
            (0..EFFECTS.len(), 0..PlayerClass::ALL.len(), 1u8..70, 0..NAMES.len()),
            0..30,
        )
    ) {
        let table = table(&seeds);
        let mut zones = ZoneDirectory::new();
        zones.insert("nro", "Northern Desert of Ro");
        let config = CatalogConfig::default();

        let first = build_catalog(&table, &zones, &config, 1).unwrap();
        let second = build_catalog(&table, &zones, &config, 2).unwrap();
        for category in SpellCategory::ALL {
            prop_assert_eq!(ids(first.entries(category)), ids(second.entries(category)));
            prop_assert_eq!(
                first.requirement_summary(category),
                second.requirement_summary(category)
            );
        }
    }

    #[test]
    fn property_zone_rule(spell_zone in 0i32..16, zone in 0i32..16) {
        let expected = spell_zone == 0 || zone == 0 || spell_zone & zone != 0;
        prop_assert_eq!(zone_allows(spell_zone, zone), expected);
        prop_assert_eq!(zone_allows(spell_zone, zone), zone_allows(zone, spell_zone));
    }

    #[test]
    fn property_empty_pool_selects_nothing(
        category in 0..SpellCategory::ALL.len(),
        grouped in any::<bool>(),
    ) {
        let catalog = build_catalog(
            &table(&[(0, 5, 14, 0), (1, 13, 12, 2)]),
            &ZoneDirectory::new(),
            &CatalogConfig::default(),
            1,
        )
        .unwrap();
        let request = SelectionRequest::new(SpellCategory::ALL[category]);
        let target = TargetDescriptor::Player { grouped_with_caller: grouped };
        let pool: Vec<Actor> = Vec::new();
        prop_assert!(select(&catalog, &request, Some(&target), &pool).is_none());
    }
}
