//! Catalog entries and their category payloads

use crate::catalog::category::SpellCategory;
use crate::core::error::CatalogError;
use crate::core::types::{PlayerClass, SpellId};
use crate::spells::{EffectSlot, RawSpellRecord, TargetShape};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

bitflags! {
    /// Ailments a cure spell removes
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
    pub struct CureMask: u8 {
        const BLINDNESS  = 1 << 0;
        const DISEASE    = 1 << 1;
        const POISON     = 1 << 2;
        const CURSE      = 1 << 3;
        const CORRUPTION = 1 << 4;
    }
}

bitflags! {
    /// Resistances a buff raises
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
    pub struct ResistMask: u8 {
        const FIRE       = 1 << 0;
        const COLD       = 1 << 1;
        const POISON     = 1 << 2;
        const DISEASE    = 1 << 3;
        const MAGIC      = 1 << 4;
        const CORRUPTION = 1 << 5;
    }
}

pub const AILMENT_COUNT: usize = 5;
pub const RESISTANCE_COUNT: usize = 6;

/// Aggregated cure effects of one spell
///
/// `potency[i]` belongs to the ailment at bit `i` of the mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CureProfile {
    pub mask: CureMask,
    pub potency: [i32; AILMENT_COUNT],
}

/// Aggregated resistance effects of one spell
///
/// `potency[i]` belongs to the resistance at bit `i` of the mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistanceProfile {
    pub mask: ResistMask,
    pub potency: [i32; RESISTANCE_COUNT],
}

/// Which kind of invisibility a spell grants (or reveals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvisibilityKind {
    Animal,
    Undead,
    Living,
    See,
}

impl InvisibilityKind {
    pub fn name(self) -> &'static str {
        match self {
            InvisibilityKind::Animal => "animal",
            InvisibilityKind::Undead => "undead",
            InvisibilityKind::Living => "living",
            InvisibilityKind::See => "see",
        }
    }
}

impl fmt::Display for InvisibilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InvisibilityKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "animal" => Ok(InvisibilityKind::Animal),
            "undead" => Ok(InvisibilityKind::Undead),
            "living" => Ok(InvisibilityKind::Living),
            "see" => Ok(InvisibilityKind::See),
            _ => Err(CatalogError::UnknownCategory(format!("invisibility {}", s))),
        }
    }
}

/// Category tag plus the payload that category carries
///
/// The variant is the category, so an entry can never carry a payload that
/// disagrees with its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Capability {
    BindAffinity,
    Charm,
    Cure(CureProfile),
    Defensive,
    /// Long zone name is filled in after the destination pass
    Depart { long_name: String },
    Escape { lesser: bool },
    Grow,
    Identify,
    Invisibility { kind: InvisibilityKind },
    Levitation,
    Lull,
    Mesmerize,
    MovementSpeed,
    Resistance(ResistanceProfile),
    Resurrect,
    Rune,
    SendHome,
    Shrink,
    SummonCorpse,
    WaterBreathing,
}

impl Capability {
    pub fn category(&self) -> SpellCategory {
        match self {
            Capability::BindAffinity => SpellCategory::BindAffinity,
            Capability::Charm => SpellCategory::Charm,
            Capability::Cure(_) => SpellCategory::Cure,
            Capability::Defensive => SpellCategory::Defensive,
            Capability::Depart { .. } => SpellCategory::Depart,
            Capability::Escape { .. } => SpellCategory::Escape,
            Capability::Grow => SpellCategory::Grow,
            Capability::Identify => SpellCategory::Identify,
            Capability::Invisibility { .. } => SpellCategory::Invisibility,
            Capability::Levitation => SpellCategory::Levitation,
            Capability::Lull => SpellCategory::Lull,
            Capability::Mesmerize => SpellCategory::Mesmerize,
            Capability::MovementSpeed => SpellCategory::MovementSpeed,
            Capability::Resistance(_) => SpellCategory::Resistance,
            Capability::Resurrect => SpellCategory::Resurrect,
            Capability::Rune => SpellCategory::Rune,
            Capability::SendHome => SpellCategory::SendHome,
            Capability::Shrink => SpellCategory::Shrink,
            Capability::SummonCorpse => SpellCategory::SummonCorpse,
            Capability::WaterBreathing => SpellCategory::WaterBreathing,
        }
    }
}

/// A classified spell, expanded for one caster class
///
/// Numeric fields (cost, zone mask, effect magnitudes) are read through the
/// shared raw record rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityEntry {
    pub record: Arc<RawSpellRecord>,
    pub capability: Capability,
    pub shape: TargetShape,
    pub class: PlayerClass,
    pub level: u8,
}

impl CapabilityEntry {
    pub fn id(&self) -> SpellId {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn category(&self) -> SpellCategory {
        self.capability.category()
    }

    pub fn mana(&self) -> i32 {
        self.record.mana
    }

    pub fn zone_type(&self) -> i32 {
        self.record.zone_type
    }

    pub fn resist_diff(&self) -> i32 {
        self.record.resist_diff
    }

    pub fn effect(&self, slot: usize) -> EffectSlot {
        self.record.effect(slot)
    }

    /// Destination short name for teleport-family spells
    pub fn teleport_zone(&self) -> &str {
        &self.record.teleport_zone
    }

    pub fn as_cure(&self) -> Option<&CureProfile> {
        match &self.capability {
            Capability::Cure(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn as_resistance(&self) -> Option<&ResistanceProfile> {
        match &self.capability {
            Capability::Resistance(profile) => Some(profile),
            _ => None,
        }
    }

    /// Resolved long destination name of a depart entry
    pub fn as_depart(&self) -> Option<&str> {
        match &self.capability {
            Capability::Depart { long_name } => Some(long_name),
            _ => None,
        }
    }

    /// `lesser` flag of an escape entry
    pub fn as_escape(&self) -> Option<bool> {
        match self.capability {
            Capability::Escape { lesser } => Some(lesser),
            _ => None,
        }
    }

    pub fn as_invisibility(&self) -> Option<InvisibilityKind> {
        match self.capability {
            Capability::Invisibility { kind } => Some(kind),
            _ => None,
        }
    }
}
