//! Runtime caster selection
//!
//! Walks a category's ranked list and returns the first entry that can be
//! cast here, on this target, by someone in the pool. The ranking already
//! encodes preference, so this is first-fit.

use crate::catalog::builder::SpellCatalog;
use crate::catalog::category::SpellCategory;
use crate::catalog::entry::CapabilityEntry;
use crate::select::request::{Actor, SelectionRequest, TargetDescriptor};
use crate::spells::TargetShape;

/// The chosen spell and the bot that will cast it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub entry: &'a CapabilityEntry,
    pub actor: &'a Actor,
}

/// Extra conditions an entry places on its caster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CasterRule {
    in_target_group: bool,
    no_companion: bool,
}

/// Spell zone restriction against the live zone type
///
/// Unrestricted spells, and zones without a type, allow everything.
pub fn zone_allows(spell_zone_type: i32, zone_type: i32) -> bool {
    spell_zone_type == 0 || zone_type == 0 || spell_zone_type & zone_type != 0
}

fn on_player(target: &TargetDescriptor) -> bool {
    matches!(target, TargetDescriptor::Player { .. })
}

fn grouped_player(target: &TargetDescriptor) -> bool {
    matches!(
        target,
        TargetDescriptor::Player {
            grouped_with_caller: true
        }
    )
}

/// Buffs: single or caster-centered group on a player, or group teleport
/// style onto a grouped player cast by a member of that group
fn buff_fit(shape: TargetShape, target: &TargetDescriptor) -> Option<CasterRule> {
    match shape {
        TargetShape::Single | TargetShape::GroupCaster if on_player(target) => {
            Some(CasterRule::default())
        }
        TargetShape::GroupMember if grouped_player(target) => Some(CasterRule {
            in_target_group: true,
            ..CasterRule::default()
        }),
        _ => None,
    }
}

/// Crowd control: hostile, not yet charmed, within the spell's level cap
fn hostile_fit(entry: &CapabilityEntry, target: &TargetDescriptor) -> bool {
    let TargetDescriptor::Hostile {
        level,
        body,
        charmed,
    } = *target
    else {
        return false;
    };
    if charmed || entry.effect(1).max < i32::from(level) {
        return false;
    }
    match entry.shape {
        TargetShape::Single => true,
        shape => shape.required_body() == Some(body),
    }
}

fn shape_fit(
    request: &SelectionRequest,
    entry: &CapabilityEntry,
    target: &TargetDescriptor,
) -> Option<CasterRule> {
    let shape = entry.shape;
    match request.category {
        SpellCategory::BindAffinity
        | SpellCategory::Grow
        | SpellCategory::Shrink
        | SpellCategory::Identify
        | SpellCategory::SummonCorpse => {
            (shape == TargetShape::Single && on_player(target)).then(CasterRule::default)
        }
        SpellCategory::Cure
        | SpellCategory::Resistance
        | SpellCategory::MovementSpeed
        | SpellCategory::Rune
        | SpellCategory::SendHome => buff_fit(shape, target),
        SpellCategory::Invisibility | SpellCategory::Levitation | SpellCategory::WaterBreathing => {
            (matches!(shape, TargetShape::Single | TargetShape::GroupCaster) && on_player(target))
                .then(CasterRule::default)
        }
        SpellCategory::Escape => {
            (shape == TargetShape::GroupCaster && on_player(target)).then(CasterRule::default)
        }
        SpellCategory::Depart => (shape == TargetShape::GroupMember && grouped_player(target))
            .then_some(CasterRule {
                in_target_group: true,
                ..CasterRule::default()
            }),
        SpellCategory::Charm | SpellCategory::Lull => {
            hostile_fit(entry, target).then_some(CasterRule {
                no_companion: true,
                ..CasterRule::default()
            })
        }
        SpellCategory::Mesmerize => hostile_fit(entry, target).then(CasterRule::default),
        SpellCategory::Resurrect => {
            let wanted = if request.filter.wants_area() {
                TargetShape::AeCaster
            } else {
                TargetShape::Corpse
            };
            (shape == wanted && *target == TargetDescriptor::Corpse).then(CasterRule::default)
        }
        SpellCategory::Defensive => Some(CasterRule::default()),
    }
}

fn find_caster<'a>(entry: &CapabilityEntry, rule: CasterRule, pool: &'a [Actor]) -> Option<&'a Actor> {
    pool.iter().find(|actor| {
        actor.can_cast(entry)
            && (!rule.in_target_group || actor.in_target_group)
            && (!rule.no_companion || !actor.has_companion)
    })
}

/// Pick the best castable entry and a bot to cast it
///
/// No target or an empty pool is simply "nobody can".
pub fn select<'a>(
    catalog: &'a SpellCatalog,
    request: &SelectionRequest,
    target: Option<&TargetDescriptor>,
    pool: &'a [Actor],
) -> Option<Selection<'a>> {
    let target = target?;
    if pool.is_empty() {
        return None;
    }

    for entry in catalog.entries(request.category) {
        if !zone_allows(entry.zone_type(), request.zone_type) {
            continue;
        }
        if request.caster_class.is_some_and(|class| class != entry.class) {
            continue;
        }
        if !request.filter.accepts(entry) {
            continue;
        }
        let Some(rule) = shape_fit(request, entry, target) else {
            continue;
        };
        if let Some(actor) = find_caster(entry, rule, pool) {
            return Some(Selection { entry, actor });
        }
    }

    None
}

/// Depart destinations somebody in the pool can reach
///
/// One line per depart entry with a capable caster; the first capable
/// actor in the pool is reported.
pub fn list_destinations<'a>(catalog: &'a SpellCatalog, pool: &'a [Actor]) -> Vec<Selection<'a>> {
    catalog
        .entries(SpellCategory::Depart)
        .iter()
        .filter_map(|entry| {
            pool.iter()
                .find(|actor| actor.can_cast(entry))
                .map(|actor| Selection { entry, actor })
        })
        .collect()
}
