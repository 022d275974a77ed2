//! Raw spell records as stored in the spell table

use crate::core::types::{PlayerClass, SpellId, CLASS_COUNT};
use crate::spells::codes::EFFECT_SLOT_COUNT;
use serde::{Deserialize, Serialize};

/// One effect slot: what the slot does and its two magnitudes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSlot {
    pub effect_id: i32,
    #[serde(default)]
    pub base: i32,
    #[serde(default)]
    pub max: i32,
}

impl EffectSlot {
    pub fn new(effect_id: i32, base: i32, max: i32) -> Self {
        Self { effect_id, base, max }
    }
}

/// A spell definition exactly as the spell table provides it
///
/// Records are immutable once loaded. The catalog shares them between
/// entries through `Arc` so numeric sort keys can be read without copying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSpellRecord {
    pub id: SpellId,
    pub name: String,
    /// Minimum level per class, indexed by `PlayerClass::slot()`
    pub class_levels: [u8; CLASS_COUNT],
    /// Ordered effect slots; missing trailing slots read as empty
    pub effects: Vec<EffectSlot>,
    pub mana: i32,
    pub target_type: u8,
    pub cast_restriction: i32,
    pub zone_type: i32,
    pub desc_num: i32,
    pub affect_index: i32,
    pub resist_diff: i32,
    /// Destination zone short name for teleport-family spells
    pub teleport_zone: String,
}

impl RawSpellRecord {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: SpellId(id),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Effect in the 1-based `slot`, or an empty slot when out of range
    pub fn effect(&self, slot: usize) -> EffectSlot {
        if slot == 0 || slot > EFFECT_SLOT_COUNT {
            return EffectSlot::default();
        }
        self.effects.get(slot - 1).copied().unwrap_or_default()
    }

    /// All populated effect slots, capped at the table's slot count
    pub fn effect_slots(&self) -> impl Iterator<Item = &EffectSlot> {
        self.effects.iter().take(EFFECT_SLOT_COUNT)
    }

    pub fn class_level(&self, class: PlayerClass) -> u8 {
        self.class_levels[class.slot()]
    }

    /// Builder-style helpers used by loaders and tests
    pub fn with_class_level(mut self, class: PlayerClass, level: u8) -> Self {
        self.class_levels[class.slot()] = level;
        self
    }

    pub fn with_effect(mut self, slot: usize, effect: EffectSlot) -> Self {
        if slot == 0 || slot > EFFECT_SLOT_COUNT {
            return self;
        }
        if self.effects.len() < slot {
            self.effects.resize(slot, EffectSlot::default());
        }
        self.effects[slot - 1] = effect;
        self
    }

    pub fn with_target(mut self, target_type: u8, cast_restriction: i32) -> Self {
        self.target_type = target_type;
        self.cast_restriction = cast_restriction;
        self
    }

    pub fn with_mana(mut self, mana: i32) -> Self {
        self.mana = mana;
        self
    }

    pub fn with_zone_type(mut self, zone_type: i32) -> Self {
        self.zone_type = zone_type;
        self
    }

    pub fn with_teleport_zone(mut self, zone: impl Into<String>) -> Self {
        self.teleport_zone = zone.into();
        self
    }
}
