//! Capability categories

use crate::core::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a bot can be asked to do with a spell
///
/// Closed set. Every classified spell lands in exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellCategory {
    BindAffinity,
    Charm,
    Cure,
    Defensive,
    Depart,
    Escape,
    Grow,
    Identify,
    Invisibility,
    Levitation,
    Lull,
    Mesmerize,
    MovementSpeed,
    Resistance,
    Resurrect,
    Rune,
    SendHome,
    Shrink,
    SummonCorpse,
    WaterBreathing,
}

impl SpellCategory {
    pub const ALL: [SpellCategory; 20] = [
        SpellCategory::BindAffinity,
        SpellCategory::Charm,
        SpellCategory::Cure,
        SpellCategory::Defensive,
        SpellCategory::Depart,
        SpellCategory::Escape,
        SpellCategory::Grow,
        SpellCategory::Identify,
        SpellCategory::Invisibility,
        SpellCategory::Levitation,
        SpellCategory::Lull,
        SpellCategory::Mesmerize,
        SpellCategory::MovementSpeed,
        SpellCategory::Resistance,
        SpellCategory::Resurrect,
        SpellCategory::Rune,
        SpellCategory::SendHome,
        SpellCategory::Shrink,
        SpellCategory::SummonCorpse,
        SpellCategory::WaterBreathing,
    ];

    /// Snake-case key, as used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            SpellCategory::BindAffinity => "bind_affinity",
            SpellCategory::Charm => "charm",
            SpellCategory::Cure => "cure",
            SpellCategory::Defensive => "defensive",
            SpellCategory::Depart => "depart",
            SpellCategory::Escape => "escape",
            SpellCategory::Grow => "grow",
            SpellCategory::Identify => "identify",
            SpellCategory::Invisibility => "invisibility",
            SpellCategory::Levitation => "levitation",
            SpellCategory::Lull => "lull",
            SpellCategory::Mesmerize => "mesmerize",
            SpellCategory::MovementSpeed => "movement_speed",
            SpellCategory::Resistance => "resistance",
            SpellCategory::Resurrect => "resurrect",
            SpellCategory::Rune => "rune",
            SpellCategory::SendHome => "send_home",
            SpellCategory::Shrink => "shrink",
            SpellCategory::SummonCorpse => "summon_corpse",
            SpellCategory::WaterBreathing => "water_breathing",
        }
    }
}

impl fmt::Display for SpellCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SpellCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.key().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}
