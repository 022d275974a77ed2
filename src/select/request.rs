//! Selection request model
//!
//! The command layer describes what was asked for, what it is aimed at and
//! which bots are available. None of this is owned by the catalog.

use crate::catalog::category::SpellCategory;
use crate::catalog::entry::{CapabilityEntry, CureMask, InvisibilityKind, ResistMask};
use crate::core::types::{ActorId, BodyType, PlayerClass};
use serde::{Deserialize, Serialize};

/// Narrows a category to the entries that fit the command's arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellFilter {
    #[default]
    Any,
    /// Cure must remove every listed ailment
    Ailment(CureMask),
    /// Buff must cover every listed resistance
    Resistance(ResistMask),
    Invisibility(InvisibilityKind),
    Escape { lesser: bool },
    /// Depart destination short name, case-insensitive
    Destination(String),
    /// Resurrection: area (caster-centered) or single corpse
    AreaEffect(bool),
}

impl SpellFilter {
    pub fn accepts(&self, entry: &CapabilityEntry) -> bool {
        match self {
            SpellFilter::Any | SpellFilter::AreaEffect(_) => true,
            SpellFilter::Ailment(mask) => entry.as_cure().is_some_and(|c| c.mask.contains(*mask)),
            SpellFilter::Resistance(mask) => entry
                .as_resistance()
                .is_some_and(|r| r.mask.contains(*mask)),
            SpellFilter::Invisibility(kind) => entry.as_invisibility() == Some(*kind),
            SpellFilter::Escape { lesser } => entry.as_escape() == Some(*lesser),
            SpellFilter::Destination(short_name) => {
                entry.teleport_zone().eq_ignore_ascii_case(short_name)
            }
        }
    }

    pub fn wants_area(&self) -> bool {
        matches!(self, SpellFilter::AreaEffect(true))
    }
}

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub category: SpellCategory,
    /// Zone type mask of the zone the caller is standing in
    #[serde(default)]
    pub zone_type: i32,
    #[serde(default)]
    pub filter: SpellFilter,
    /// Only consider this caster class
    #[serde(default)]
    pub caster_class: Option<PlayerClass>,
}

impl SelectionRequest {
    pub fn new(category: SpellCategory) -> Self {
        Self {
            category,
            zone_type: 0,
            filter: SpellFilter::Any,
            caster_class: None,
        }
    }

    pub fn with_zone_type(mut self, zone_type: i32) -> Self {
        self.zone_type = zone_type;
        self
    }

    pub fn with_filter(mut self, filter: SpellFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_caster_class(mut self, class: PlayerClass) -> Self {
        self.caster_class = Some(class);
        self
    }
}

/// What the spell is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetDescriptor {
    Player { grouped_with_caller: bool },
    Hostile { level: u8, body: BodyType, charmed: bool },
    Corpse,
}

/// A bot that could cast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub class: PlayerClass,
    pub level: u8,
    /// Currently has a pet or charmed companion
    #[serde(default)]
    pub has_companion: bool,
    /// Member of the target's group
    #[serde(default)]
    pub in_target_group: bool,
}

impl Actor {
    pub fn new(id: u32, name: impl Into<String>, class: PlayerClass, level: u8) -> Self {
        Self {
            id: ActorId(id),
            name: name.into(),
            class,
            level,
            has_companion: false,
            in_target_group: false,
        }
    }

    pub fn with_companion(mut self) -> Self {
        self.has_companion = true;
        self
    }

    pub fn in_target_group(mut self) -> Self {
        self.in_target_group = true;
        self
    }

    /// Class matches and level is high enough
    pub fn can_cast(&self, entry: &CapabilityEntry) -> bool {
        self.class == entry.class && self.level >= entry.level
    }
}
