//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for spell records in the raw spell table
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpellId(pub u32);

impl SpellId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SpellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

/// Identifier for an actor (bot) supplied by the command layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Number of playable classes, and therefore of level slots on a spell record
pub const CLASS_COUNT: usize = 16;

/// Playable class enumeration
///
/// Discriminants match the numeric class ids used by the spell table, so
/// `class as u8 - 1` is the index into a record's level slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PlayerClass {
    Warrior = 1,
    Cleric = 2,
    Paladin = 3,
    Ranger = 4,
    ShadowKnight = 5,
    Druid = 6,
    Monk = 7,
    Bard = 8,
    Rogue = 9,
    Shaman = 10,
    Necromancer = 11,
    Wizard = 12,
    Magician = 13,
    Enchanter = 14,
    Beastlord = 15,
    Berserker = 16,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; CLASS_COUNT] = [
        PlayerClass::Warrior,
        PlayerClass::Cleric,
        PlayerClass::Paladin,
        PlayerClass::Ranger,
        PlayerClass::ShadowKnight,
        PlayerClass::Druid,
        PlayerClass::Monk,
        PlayerClass::Bard,
        PlayerClass::Rogue,
        PlayerClass::Shaman,
        PlayerClass::Necromancer,
        PlayerClass::Wizard,
        PlayerClass::Magician,
        PlayerClass::Enchanter,
        PlayerClass::Beastlord,
        PlayerClass::Berserker,
    ];

    /// Numeric class id (1-based)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Index into a spell record's level slots
    pub fn slot(self) -> usize {
        self as usize - 1
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id).checked_sub(1)?).copied()
    }

    /// Display name used in requirement strings
    pub fn name(self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Cleric => "Cleric",
            PlayerClass::Paladin => "Paladin",
            PlayerClass::Ranger => "Ranger",
            PlayerClass::ShadowKnight => "Shadowknight",
            PlayerClass::Druid => "Druid",
            PlayerClass::Monk => "Monk",
            PlayerClass::Bard => "Bard",
            PlayerClass::Rogue => "Rogue",
            PlayerClass::Shaman => "Shaman",
            PlayerClass::Necromancer => "Necromancer",
            PlayerClass::Wizard => "Wizard",
            PlayerClass::Magician => "Magician",
            PlayerClass::Enchanter => "Enchanter",
            PlayerClass::Beastlord => "Beastlord",
            PlayerClass::Berserker => "Berserker",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body type of a hostile target, as far as shape-gated spells care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    #[default]
    Humanoid,
    Animal,
    Undead,
    Summoned,
    Plant,
}

/// Case-insensitive (ASCII) ordering, matching `strcasecmp` on spell names
pub fn cmp_ignore_case(a: &str, b: &str) -> std::cmp::Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
