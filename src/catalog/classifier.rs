//! Spell classifier
//!
//! Turns a raw spell record into at most one [`Capability`]. The work is
//! split in two:
//!
//! 1. Gatekeeping: the record needs a name, a recognized target shape and at
//!    least one class that can use it.
//! 2. Rule matching: an ordered table of [`ClassifierRule`]s is walked from
//!    the top. A rule whose trigger matches gets to build the capability;
//!    if it declines (returns `None`) the walk continues with the next rule.
//!    The first capability built wins.
//!
//! Rules are plain data so each one can be tested on its own and the order
//! is visible in one place.

use crate::catalog::entry::{
    Capability, CureMask, CureProfile, InvisibilityKind, ResistMask, ResistanceProfile,
};
use crate::core::types::PlayerClass;
use crate::spells::codes::{effect, DEFENSIVE_DISCIPLINES, DISCIPLINE_DESCRIPTION};
use crate::spells::{RawSpellRecord, TargetShape};

/// What has to be true about a record before a rule is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Effect slot `slot` (1-based) holds `effect_id`
    Effect { slot: usize, effect_id: i32 },
    /// The description index equals the value
    Description(i32),
    /// Affect index equals `index` and slot 1 holds one of `effects`
    AffectIndex {
        index: i32,
        effects: &'static [i32],
    },
}

impl Trigger {
    pub fn matches(&self, record: &RawSpellRecord) -> bool {
        match *self {
            Trigger::Effect { slot, effect_id } => record.effect(slot).effect_id == effect_id,
            Trigger::Description(desc) => record.desc_num == desc,
            Trigger::AffectIndex { index, effects } => {
                record.affect_index == index && effects.contains(&record.effect(1).effect_id)
            }
        }
    }
}

/// One entry of the classification table
#[derive(Debug, Clone, Copy)]
pub struct ClassifierRule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub build: fn(&RawSpellRecord) -> Option<Capability>,
}

impl ClassifierRule {
    pub fn apply(&self, record: &RawSpellRecord) -> Option<Capability> {
        if self.trigger.matches(record) {
            (self.build)(record)
        } else {
            None
        }
    }
}

const fn slot1(name: &'static str, effect_id: i32, build: fn(&RawSpellRecord) -> Option<Capability>) -> ClassifierRule {
    ClassifierRule {
        name,
        trigger: Trigger::Effect { slot: 1, effect_id },
        build,
    }
}

const CURE_EFFECTS: &[i32] = &[
    effect::BLIND,
    effect::DISEASE_COUNTER,
    effect::POISON_COUNTER,
    effect::CURSE_COUNTER,
    effect::CORRUPTION_COUNTER,
];

const RESIST_EFFECTS: &[i32] = &[
    effect::RESIST_FIRE,
    effect::RESIST_COLD,
    effect::RESIST_POISON,
    effect::RESIST_DISEASE,
    effect::RESIST_MAGIC,
    effect::RESIST_CORRUPTION,
];

/// Cure effect id -> (mask bit, potency index)
const CURE_TABLE: [(i32, CureMask, usize); 5] = [
    (effect::BLIND, CureMask::BLINDNESS, 0),
    (effect::DISEASE_COUNTER, CureMask::DISEASE, 1),
    (effect::POISON_COUNTER, CureMask::POISON, 2),
    (effect::CURSE_COUNTER, CureMask::CURSE, 3),
    (effect::CORRUPTION_COUNTER, CureMask::CORRUPTION, 4),
];

/// Resist effect id -> (mask bit, potency index)
const RESIST_TABLE: [(i32, ResistMask, usize); 6] = [
    (effect::RESIST_FIRE, ResistMask::FIRE, 0),
    (effect::RESIST_COLD, ResistMask::COLD, 1),
    (effect::RESIST_POISON, ResistMask::POISON, 2),
    (effect::RESIST_DISEASE, ResistMask::DISEASE, 3),
    (effect::RESIST_MAGIC, ResistMask::MAGIC, 4),
    (effect::RESIST_CORRUPTION, ResistMask::CORRUPTION, 5),
];

/// The classification table, in evaluation order
pub static RULES: &[ClassifierRule] = &[
    slot1("bind_affinity", effect::BIND_AFFINITY, |_| Some(Capability::BindAffinity)),
    slot1("charm", effect::CHARM, |_| Some(Capability::Charm)),
    slot1("teleport", effect::TELEPORT, |_| Some(depart())),
    slot1("succor", effect::SUCCOR, build_succor),
    slot1("translocate", effect::TRANSLOCATE, build_translocate),
    slot1("model_size", effect::MODEL_SIZE, build_model_size),
    slot1("identify", effect::IDENTIFY, |_| Some(Capability::Identify)),
    slot1("invisibility", effect::INVISIBILITY, |_| {
        Some(Capability::Invisibility { kind: InvisibilityKind::Living })
    }),
    slot1("see_invisible", effect::SEE_INVIS, |_| {
        Some(Capability::Invisibility { kind: InvisibilityKind::See })
    }),
    slot1("invis_vs_undead", effect::INVIS_VS_UNDEAD, |_| {
        Some(Capability::Invisibility { kind: InvisibilityKind::Undead })
    }),
    slot1("invis_vs_animals", effect::INVIS_VS_ANIMALS, |_| {
        Some(Capability::Invisibility { kind: InvisibilityKind::Animal })
    }),
    slot1("levitate", effect::LEVITATE, |_| Some(Capability::Levitation)),
    slot1("mesmerize", effect::MEZ, |_| Some(Capability::Mesmerize)),
    slot1("revive", effect::REVIVE, |_| Some(Capability::Resurrect)),
    slot1("rune", effect::RUNE, |_| Some(Capability::Rune)),
    slot1("summon_corpse", effect::SUMMON_CORPSE, |_| Some(Capability::SummonCorpse)),
    slot1("water_breathing", effect::WATER_BREATHING, |_| Some(Capability::WaterBreathing)),
    ClassifierRule {
        name: "movement_speed",
        trigger: Trigger::Effect { slot: 2, effect_id: effect::MOVEMENT_SPEED },
        build: |_| Some(Capability::MovementSpeed),
    },
    ClassifierRule {
        name: "lull",
        trigger: Trigger::Effect { slot: 3, effect_id: effect::LULL },
        build: |_| Some(Capability::Lull),
    },
    ClassifierRule {
        name: "defensive_discipline",
        trigger: Trigger::Description(DISCIPLINE_DESCRIPTION),
        build: build_defensive,
    },
    ClassifierRule {
        name: "cure",
        trigger: Trigger::AffectIndex { index: 1, effects: CURE_EFFECTS },
        build: build_cure,
    },
    ClassifierRule {
        name: "resistance",
        trigger: Trigger::AffectIndex { index: 2, effects: RESIST_EFFECTS },
        build: build_resistance,
    },
];

fn depart() -> Capability {
    Capability::Depart { long_name: String::new() }
}

// Escape when the zone or the name is "same". Both checks, and the
// "lesser" match, ignore case.
fn build_succor(record: &RawSpellRecord) -> Option<Capability> {
    let safe_return = record.teleport_zone.eq_ignore_ascii_case("same")
        || record.name.eq_ignore_ascii_case("same");
    if !safe_return {
        return Some(depart());
    }
    let lesser = record.name.to_ascii_lowercase().contains("lesser");
    Some(Capability::Escape { lesser })
}

// No destination zone means "back to bind point".
fn build_translocate(record: &RawSpellRecord) -> Option<Capability> {
    if record.teleport_zone.is_empty() {
        Some(Capability::SendHome)
    } else {
        Some(depart())
    }
}

fn build_model_size(record: &RawSpellRecord) -> Option<Capability> {
    match record.effect(1).base {
        base if base > 100 => Some(Capability::Grow),
        base if base > 0 && base < 100 => Some(Capability::Shrink),
        _ => None,
    }
}

fn build_defensive(record: &RawSpellRecord) -> Option<Capability> {
    DEFENSIVE_DISCIPLINES
        .contains(&record.id.0)
        .then_some(Capability::Defensive)
}

fn build_cure(record: &RawSpellRecord) -> Option<Capability> {
    let mut profile = CureProfile::default();
    for slot in record.effect_slots().filter(|slot| slot.base < 0) {
        if let Some(&(_, bit, index)) = CURE_TABLE.iter().find(|(id, _, _)| *id == slot.effect_id) {
            profile.mask |= bit;
            profile.potency[index] += slot.base;
        }
    }
    (!profile.mask.is_empty()).then_some(Capability::Cure(profile))
}

fn build_resistance(record: &RawSpellRecord) -> Option<Capability> {
    let mut profile = ResistanceProfile::default();
    for slot in record.effect_slots().filter(|slot| slot.base < 0) {
        if let Some(&(_, bit, index)) = RESIST_TABLE.iter().find(|(id, _, _)| *id == slot.effect_id) {
            profile.mask |= bit;
            profile.potency[index] += slot.base;
        }
    }
    (!profile.mask.is_empty()).then_some(Capability::Resistance(profile))
}

/// Walk the rule table and return the first capability built
pub fn classify_capability(record: &RawSpellRecord) -> Option<Capability> {
    RULES.iter().find_map(|rule| rule.apply(record))
}

/// A record that passed classification, before per-class expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub capability: Capability,
    pub shape: TargetShape,
    /// Qualifying classes with their minimum level, ascending class id
    pub class_levels: Vec<(PlayerClass, u8)>,
}

/// Applies gatekeeping and the rule table to raw records
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    hard_level_cap: u8,
}

impl Classifier {
    pub fn new(hard_level_cap: u8) -> Self {
        Self { hard_level_cap }
    }

    /// Classes whose level slot is set and within the hard cap
    pub fn qualifying_classes(&self, record: &RawSpellRecord) -> Vec<(PlayerClass, u8)> {
        PlayerClass::ALL
            .iter()
            .map(|&class| (class, record.class_level(class)))
            .filter(|&(_, level)| level != 0 && level <= self.hard_level_cap)
            .collect()
    }

    pub fn classify(&self, record: &RawSpellRecord) -> Option<Classification> {
        if record.name.is_empty() {
            return None;
        }
        let shape = TargetShape::classify(record.target_type, record.cast_restriction)?;

        let class_levels = self.qualifying_classes(record);
        if class_levels.is_empty() {
            return None;
        }

        let capability = classify_capability(record)?;
        Some(Classification {
            capability,
            shape,
            class_levels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::category::SpellCategory;
    use crate::spells::codes::target;
    use crate::spells::EffectSlot;

    fn spell(id: u32, name: &str, slot: usize, effect_id: i32, base: i32) -> RawSpellRecord {
        RawSpellRecord::new(id, name)
            .with_target(target::TARGET, 0)
            .with_class_level(PlayerClass::Cleric, 10)
            .with_effect(slot, EffectSlot::new(effect_id, base, 0))
    }

    fn category_of(record: &RawSpellRecord) -> Option<SpellCategory> {
        Classifier::new(127)
            .classify(record)
            .map(|c| c.capability.category())
    }

    #[test]
    fn test_rejects_unnamed_records() {
        let record = spell(10, "", 1, effect::CHARM, 0);
        assert_eq!(category_of(&record), None);
    }

    #[test]
    fn test_rejects_unknown_shapes_and_restrictions() {
        let bad_shape = spell(10, "Charm", 1, effect::CHARM, 0).with_target(0x01, 0);
        assert_eq!(category_of(&bad_shape), None);

        let bad_restriction = spell(10, "Charm", 1, effect::CHARM, 0).with_target(target::TARGET, 7);
        assert_eq!(category_of(&bad_restriction), None);
    }

    #[test]
    fn test_rejects_records_without_usable_class() {
        let record = RawSpellRecord::new(10, "Charm")
            .with_target(target::TARGET, 0)
            .with_class_level(PlayerClass::Enchanter, 255)
            .with_effect(1, EffectSlot::new(effect::CHARM, 0, 0));
        assert_eq!(category_of(&record), None);

        let capped = Classifier::new(60);
        let record = record.with_class_level(PlayerClass::Enchanter, 61);
        assert!(capped.classify(&record).is_none());
    }

    #[test]
    fn test_qualifying_classes_in_class_order() {
        let record = RawSpellRecord::new(10, "Gate")
            .with_class_level(PlayerClass::Wizard, 4)
            .with_class_level(PlayerClass::Cleric, 5)
            .with_class_level(PlayerClass::Necromancer, 255);
        let classes = Classifier::new(127).qualifying_classes(&record);
        assert_eq!(classes, vec![(PlayerClass::Cleric, 5), (PlayerClass::Wizard, 4)]);
    }

    #[test]
    fn test_slot_one_dictionary() {
        let cases = [
            (effect::BIND_AFFINITY, SpellCategory::BindAffinity),
            (effect::CHARM, SpellCategory::Charm),
            (effect::TELEPORT, SpellCategory::Depart),
            (effect::IDENTIFY, SpellCategory::Identify),
            (effect::LEVITATE, SpellCategory::Levitation),
            (effect::MEZ, SpellCategory::Mesmerize),
            (effect::REVIVE, SpellCategory::Resurrect),
            (effect::RUNE, SpellCategory::Rune),
            (effect::SUMMON_CORPSE, SpellCategory::SummonCorpse),
            (effect::WATER_BREATHING, SpellCategory::WaterBreathing),
        ];
        for (effect_id, expected) in cases {
            let record = spell(10, "Test Spell", 1, effect_id, 0);
            assert_eq!(category_of(&record), Some(expected), "effect {}", effect_id);
        }
    }

    #[test]
    fn test_invisibility_variants() {
        let cases = [
            (effect::INVISIBILITY, InvisibilityKind::Living),
            (effect::SEE_INVIS, InvisibilityKind::See),
            (effect::INVIS_VS_UNDEAD, InvisibilityKind::Undead),
            (effect::INVIS_VS_ANIMALS, InvisibilityKind::Animal),
        ];
        for (effect_id, kind) in cases {
            let record = spell(10, "Invis", 1, effect_id, 0);
            assert_eq!(
                classify_capability(&record),
                Some(Capability::Invisibility { kind })
            );
        }
    }

    #[test]
    fn test_model_size_threshold() {
        assert_eq!(
            classify_capability(&spell(10, "Grow", 1, effect::MODEL_SIZE, 130)),
            Some(Capability::Grow)
        );
        assert_eq!(
            classify_capability(&spell(10, "Shrink", 1, effect::MODEL_SIZE, 65)),
            Some(Capability::Shrink)
        );
        assert_eq!(classify_capability(&spell(10, "Size", 1, effect::MODEL_SIZE, 100)), None);
        assert_eq!(classify_capability(&spell(10, "Size", 1, effect::MODEL_SIZE, 0)), None);
    }

    #[test]
    fn test_succor_escape_and_depart() {
        let evac = spell(10, "Evacuate", 1, effect::SUCCOR, 0).with_teleport_zone("same");
        assert_eq!(classify_capability(&evac), Some(Capability::Escape { lesser: false }));

        let lesser = spell(10, "Lesser Evacuate", 1, effect::SUCCOR, 0).with_teleport_zone("SAME");
        assert_eq!(classify_capability(&lesser), Some(Capability::Escape { lesser: true }));

        let succor = spell(10, "Succor: Butcher", 1, effect::SUCCOR, 0).with_teleport_zone("butcher");
        assert_eq!(classify_capability(&succor).map(|c| c.category()), Some(SpellCategory::Depart));
    }

    #[test]
    fn test_translocate_send_home_or_depart() {
        let home = spell(10, "Translocate", 1, effect::TRANSLOCATE, 0);
        assert_eq!(classify_capability(&home), Some(Capability::SendHome));

        let away = home.clone().with_teleport_zone("nro");
        assert_eq!(classify_capability(&away).map(|c| c.category()), Some(SpellCategory::Depart));
    }

    #[test]
    fn test_slot_two_and_three() {
        let sow = spell(10, "Spirit of Wolf", 2, effect::MOVEMENT_SPEED, 40);
        assert_eq!(classify_capability(&sow), Some(Capability::MovementSpeed));

        let lull = spell(10, "Lull", 3, effect::LULL, 0);
        assert_eq!(classify_capability(&lull), Some(Capability::Lull));
    }

    #[test]
    fn test_slot_one_takes_priority() {
        let record = spell(10, "Charming Wolf", 1, effect::CHARM, 0)
            .with_effect(2, EffectSlot::new(effect::MOVEMENT_SPEED, 40, 0));
        assert_eq!(classify_capability(&record), Some(Capability::Charm));
    }

    #[test]
    fn test_declined_rule_falls_through() {
        let record = spell(10, "Size and Speed", 1, effect::MODEL_SIZE, 100)
            .with_effect(2, EffectSlot::new(effect::MOVEMENT_SPEED, 40, 0));
        assert_eq!(classify_capability(&record), Some(Capability::MovementSpeed));
    }

    #[test]
    fn test_defensive_allow_list() {
        let mut record = spell(4499, "Defensive Discipline", 1, 0, 0);
        record.desc_num = DISCIPLINE_DESCRIPTION;
        assert_eq!(classify_capability(&record), Some(Capability::Defensive));

        record.id = crate::core::types::SpellId(4500);
        assert_eq!(classify_capability(&record), None);
    }

    #[test]
    fn test_cure_aggregation() {
        let mut record = RawSpellRecord::new(10, "Pure Blood")
            .with_effect(1, EffectSlot::new(effect::DISEASE_COUNTER, -9, 0))
            .with_effect(2, EffectSlot::new(effect::POISON_COUNTER, -9, 0))
            .with_effect(3, EffectSlot::new(effect::POISON_COUNTER, -4, 0))
            .with_effect(4, EffectSlot::new(effect::CURSE_COUNTER, 5, 0));
        record.affect_index = 1;

        let Some(Capability::Cure(profile)) = classify_capability(&record) else {
            panic!("expected cure");
        };
        assert_eq!(profile.mask, CureMask::DISEASE | CureMask::POISON);
        assert_eq!(profile.potency, [0, -9, -13, 0, 0]);
    }

    #[test]
    fn test_cure_without_negative_contribution_is_dropped() {
        let mut record = RawSpellRecord::new(10, "Odd Cure")
            .with_effect(1, EffectSlot::new(effect::DISEASE_COUNTER, 4, 0));
        record.affect_index = 1;
        assert_eq!(classify_capability(&record), None);
    }

    #[test]
    fn test_resistance_aggregation() {
        let mut record = RawSpellRecord::new(10, "Resist Fire")
            .with_effect(1, EffectSlot::new(effect::RESIST_FIRE, -20, 0))
            .with_effect(2, EffectSlot::new(effect::RESIST_CORRUPTION, -5, 0));
        record.affect_index = 2;

        let Some(Capability::Resistance(profile)) = classify_capability(&record) else {
            panic!("expected resistance");
        };
        assert_eq!(profile.mask, ResistMask::FIRE | ResistMask::CORRUPTION);
        assert_eq!(profile.potency, [-20, 0, 0, 0, 0, -5]);
    }

    #[test]
    fn test_affect_index_must_match_family() {
        let mut record = RawSpellRecord::new(10, "Resist Fire")
            .with_effect(1, EffectSlot::new(effect::RESIST_FIRE, -20, 0));
        record.affect_index = 1;
        assert_eq!(classify_capability(&record), None);
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }
}
