//! Target shape classification
//!
//! Raw spell data encodes "who does this land on" as a target type plus an
//! optional cast restriction. The catalog only cares about a handful of
//! shapes, so everything is folded into [`TargetShape`] up front and records
//! with an unrecognized combination never reach the classifier rules.

use crate::core::types::BodyType;
use crate::spells::codes::{restriction, target};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope a spell affects
///
/// Declaration order is the ranking ordinal: body-gated single target
/// shapes sort first, corpse last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetShape {
    Animal,
    Undead,
    Summoned,
    Plant,
    Single,
    /// Group teleport: lands on every member of the target's group
    GroupMember,
    /// Group spell centered on the caster
    GroupCaster,
    AeCaster,
    AeBard,
    AeTarget,
    Corpse,
}

impl TargetShape {
    /// Fold a raw target type and cast restriction into a shape
    ///
    /// Returns `None` for combinations the catalog does not handle.
    pub fn classify(target_type: u8, cast_restriction: i32) -> Option<Self> {
        if target_type == target::TARGET {
            return match cast_restriction {
                restriction::NONE => Some(Self::Single),
                restriction::ANIMAL => Some(Self::Animal),
                restriction::PLANT => Some(Self::Plant),
                restriction::SUMMONED => Some(Self::Summoned),
                restriction::UNDEAD => Some(Self::Undead),
                _ => None,
            };
        }

        if cast_restriction != restriction::NONE {
            return None;
        }

        match target_type {
            target::GROUP_TELEPORT => Some(Self::GroupMember),
            target::AE_CASTER => Some(Self::AeCaster),
            target::AE_BARD => Some(Self::AeBard),
            target::AE_TARGET => Some(Self::AeTarget),
            target::ANIMAL => Some(Self::Animal),
            target::UNDEAD => Some(Self::Undead),
            target::SUMMONED => Some(Self::Summoned),
            target::PLANT => Some(Self::Plant),
            target::CORPSE => Some(Self::Corpse),
            target::GROUP => Some(Self::GroupCaster),
            _ => None,
        }
    }

    /// Body type a body-gated shape requires, if any
    pub fn required_body(self) -> Option<BodyType> {
        match self {
            Self::Animal => Some(BodyType::Animal),
            Self::Undead => Some(BodyType::Undead),
            Self::Summoned => Some(BodyType::Summoned),
            Self::Plant => Some(BodyType::Plant),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Undead => "Undead",
            Self::Summoned => "Summoned",
            Self::Plant => "Plant",
            Self::Single => "Single",
            Self::GroupMember => "GroupMember",
            Self::GroupCaster => "GroupCaster",
            Self::AeCaster => "AeCaster",
            Self::AeBard => "AeBard",
            Self::AeTarget => "AeTarget",
            Self::Corpse => "Corpse",
        }
    }
}

impl fmt::Display for TargetShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
