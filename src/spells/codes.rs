//! Numeric codes used by the raw spell table
//!
//! These mirror the values stored in the spell data itself. Only the codes
//! the catalog actually inspects are listed.

/// Spell effect ids ("SPA" values) stored in each effect slot
pub mod effect {
    pub const MOVEMENT_SPEED: i32 = 3;
    pub const INVISIBILITY: i32 = 12;
    pub const SEE_INVIS: i32 = 13;
    pub const WATER_BREATHING: i32 = 14;
    pub const LULL: i32 = 18;
    pub const BLIND: i32 = 20;
    pub const CHARM: i32 = 22;
    pub const BIND_AFFINITY: i32 = 25;
    pub const INVIS_VS_UNDEAD: i32 = 28;
    pub const INVIS_VS_ANIMALS: i32 = 29;
    pub const MEZ: i32 = 31;
    pub const DISEASE_COUNTER: i32 = 35;
    pub const POISON_COUNTER: i32 = 36;
    pub const RESIST_FIRE: i32 = 46;
    pub const RESIST_COLD: i32 = 47;
    pub const RESIST_POISON: i32 = 48;
    pub const RESIST_DISEASE: i32 = 49;
    pub const RESIST_MAGIC: i32 = 50;
    pub const RUNE: i32 = 55;
    pub const LEVITATE: i32 = 57;
    pub const IDENTIFY: i32 = 61;
    pub const REVIVE: i32 = 81;
    pub const TELEPORT: i32 = 83;
    pub const SUCCOR: i32 = 88;
    pub const MODEL_SIZE: i32 = 89;
    pub const SUMMON_CORPSE: i32 = 91;
    pub const TRANSLOCATE: i32 = 104;
    pub const CURSE_COUNTER: i32 = 116;
    pub const CORRUPTION_COUNTER: i32 = 369;
    pub const RESIST_CORRUPTION: i32 = 370;
}

/// Raw target type codes
pub mod target {
    pub const GROUP_TELEPORT: u8 = 0x03;
    pub const AE_CASTER: u8 = 0x04;
    pub const TARGET: u8 = 0x05;
    pub const AE_TARGET: u8 = 0x08;
    pub const ANIMAL: u8 = 0x09;
    pub const UNDEAD: u8 = 0x0a;
    pub const SUMMONED: u8 = 0x0b;
    pub const CORPSE: u8 = 0x0f;
    pub const PLANT: u8 = 0x10;
    pub const AE_BARD: u8 = 0x28;
    pub const GROUP: u8 = 0x29;
}

/// Cast restrictions that narrow a single-target spell to one body type
pub mod restriction {
    pub const NONE: i32 = 0;
    pub const ANIMAL: i32 = 104;
    pub const PLANT: i32 = 105;
    pub const SUMMONED: i32 = 118;
    pub const UNDEAD: i32 = 120;
}

/// First record id that holds a real spell; lower ids are reserved
pub const FIRST_SPELL_ID: u32 = 2;

/// Number of effect slots on a spell record
pub const EFFECT_SLOT_COUNT: usize = 12;

/// Description index shared by the combat disciplines
pub const DISCIPLINE_DESCRIPTION: i32 = 27;

/// Discipline ids known to be defensive stances
pub const DEFENSIVE_DISCIPLINES: &[u32] = &[
    4499, 4503, 4688, 6663, 6673, 6731, 6741, 7004, 7005, 10965, 11854, 11866,
];
