//! Ranking engine
//!
//! Each category has a fixed sequence of sort keys. The sequence reads in
//! application order: the first key is the weakest tie-breaker and the last
//! key is the primary ordering. Rather than running one stable sort per key
//! the keys are folded into a single comparator that consults them from the
//! last to the first, and the list is sorted once with a stable sort. Entries
//! that tie on every key keep their insertion order.

use crate::catalog::category::SpellCategory;
use crate::catalog::entry::CapabilityEntry;
use crate::core::types::cmp_ignore_case;
use std::cmp::Ordering;

/// A value a sort key reads from an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    CasterClass,
    Level,
    Shape,
    Mana,
    /// Partition on "costs anything"; ascending puts costed spells first
    FreeCast,
    Base1,
    Base2,
    Max1,
    ResistDiff,
    ZoneType,
    SpellId,
    CureMask,
    ResistMask,
    InvisibilityKind,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

pub const fn asc(field: SortField) -> SortKey {
    SortKey {
        field,
        direction: Direction::Ascending,
    }
}

pub const fn dsc(field: SortField) -> SortKey {
    SortKey {
        field,
        direction: Direction::Descending,
    }
}

impl SortKey {
    pub fn compare(&self, a: &CapabilityEntry, b: &CapabilityEntry) -> Ordering {
        let ordering = compare_field(self.field, a, b);
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

fn compare_field(field: SortField, a: &CapabilityEntry, b: &CapabilityEntry) -> Ordering {
    match field {
        SortField::CasterClass => a.class.cmp(&b.class),
        SortField::Level => a.level.cmp(&b.level),
        SortField::Shape => a.shape.cmp(&b.shape),
        SortField::Mana => a.mana().cmp(&b.mana()),
        SortField::FreeCast => (a.mana() == 0).cmp(&(b.mana() == 0)),
        SortField::Base1 => a.effect(1).base.cmp(&b.effect(1).base),
        SortField::Base2 => a.effect(2).base.cmp(&b.effect(2).base),
        SortField::Max1 => a.effect(1).max.cmp(&b.effect(1).max),
        SortField::ResistDiff => a.resist_diff().cmp(&b.resist_diff()),
        SortField::ZoneType => a.zone_type().cmp(&b.zone_type()),
        SortField::SpellId => a.id().cmp(&b.id()),
        SortField::CureMask => a.as_cure().map(|c| c.mask).cmp(&b.as_cure().map(|c| c.mask)),
        SortField::ResistMask => a
            .as_resistance()
            .map(|r| r.mask)
            .cmp(&b.as_resistance().map(|r| r.mask)),
        SortField::InvisibilityKind => a.as_invisibility().cmp(&b.as_invisibility()),
        SortField::Name => cmp_ignore_case(a.name(), b.name()),
    }
}

use SortField::*;

const BIND_AFFINITY: &[SortKey] = &[asc(CasterClass), asc(Level), asc(Shape)];
const BIND_AFFINITY_FREE_FIRST: &[SortKey] =
    &[asc(CasterClass), asc(Level), asc(Shape), dsc(FreeCast)];
const CHARM: &[SortKey] = &[asc(CasterClass), asc(Level), dsc(Max1), asc(Shape), dsc(ResistDiff)];
const CURE: &[SortKey] = &[asc(CasterClass), dsc(CureMask), dsc(Level), asc(Shape)];
const BY_NAME_THEN_CLASS: &[SortKey] = &[asc(Name), asc(Level), asc(CasterClass), asc(Shape)];
const INVISIBILITY: &[SortKey] = &[
    asc(CasterClass),
    asc(Name),
    dsc(Level),
    asc(ZoneType),
    asc(Shape),
    asc(InvisibilityKind),
];
const LEVITATION: &[SortKey] = &[asc(CasterClass), asc(Name), dsc(Level), asc(ZoneType), asc(Shape)];
const LULL: &[SortKey] = &[asc(Name), asc(Level), asc(CasterClass), asc(ZoneType), asc(Shape)];
const MESMERIZE: &[SortKey] = &[asc(CasterClass), dsc(Level), dsc(Max1), asc(Shape), dsc(ResistDiff)];
const MOVEMENT_SPEED: &[SortKey] = &[asc(CasterClass), asc(Level), dsc(Base2), asc(Shape)];
const RESISTANCE: &[SortKey] = &[asc(CasterClass), dsc(ResistMask), dsc(Level), asc(Shape)];
const RESURRECT: &[SortKey] = &[
    asc(Name),
    asc(SpellId),
    asc(Level),
    asc(CasterClass),
    asc(ZoneType),
    asc(Shape),
    dsc(Base1),
];
const RUNE: &[SortKey] = &[dsc(Max1), asc(Level), asc(Shape)];
const WATER_BREATHING: &[SortKey] = &[asc(CasterClass), asc(Name), asc(Level), asc(Shape)];

/// Sort keys for a category, in application order
///
/// Categories without a sequence keep insertion order.
pub fn sequence(category: SpellCategory, prefer_free_spells: bool) -> &'static [SortKey] {
    match category {
        SpellCategory::BindAffinity if prefer_free_spells => BIND_AFFINITY_FREE_FIRST,
        SpellCategory::BindAffinity => BIND_AFFINITY,
        SpellCategory::Charm => CHARM,
        SpellCategory::Cure => CURE,
        SpellCategory::Depart
        | SpellCategory::Escape
        | SpellCategory::Grow
        | SpellCategory::Shrink => BY_NAME_THEN_CLASS,
        SpellCategory::Invisibility => INVISIBILITY,
        SpellCategory::Levitation => LEVITATION,
        SpellCategory::Lull => LULL,
        SpellCategory::Mesmerize => MESMERIZE,
        SpellCategory::MovementSpeed => MOVEMENT_SPEED,
        SpellCategory::Resistance => RESISTANCE,
        SpellCategory::Resurrect => RESURRECT,
        SpellCategory::Rune => RUNE,
        SpellCategory::WaterBreathing => WATER_BREATHING,
        SpellCategory::Defensive
        | SpellCategory::Identify
        | SpellCategory::SendHome
        | SpellCategory::SummonCorpse => &[],
    }
}

/// Compare two entries under a key sequence, last key first
pub fn compare_by(keys: &[SortKey], a: &CapabilityEntry, b: &CapabilityEntry) -> Ordering {
    keys.iter()
        .rev()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Stable-sort a list under a key sequence
pub fn apply_sequence(list: &mut [CapabilityEntry], keys: &[SortKey]) {
    if list.len() < 2 || keys.is_empty() {
        return;
    }
    list.sort_by(|a, b| compare_by(keys, a, b));
}

/// Put one category list into priority order
pub fn rank(list: &mut [CapabilityEntry], category: SpellCategory, prefer_free_spells: bool) {
    apply_sequence(list, sequence(category, prefer_free_spells));
}
