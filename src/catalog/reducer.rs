//! Rank-tier reduction
//!
//! Later expansions reprint older spells as "Rk. II" and "Rk. III" tiers.
//! Bots only need one tier per spell, so each category list is thinned
//! according to the configured [`RankFilter`]. Tier detection is a name
//! heuristic: a trailing "II" marks rank II and a trailing "III" marks
//! rank III.

use crate::catalog::entry::CapabilityEntry;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names shorter than this are placeholders and never survive reduction
pub const MIN_NAME_LEN: usize = 3;

/// Which rank tier survives reduction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankFilter {
    /// Keep every tier; only placeholders are dropped
    AllRanks,
    /// Keep base spells, drop every rank II and III reprint
    #[default]
    RankOne,
    /// Keep rank II, drop rank III and the base spells rank II replaces
    RankTwo,
    /// Keep rank III, drop rank II and the base spells rank III replaces
    RankThree,
}

impl fmt::Display for RankFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RankFilter::AllRanks => "all_ranks",
            RankFilter::RankOne => "rank_one",
            RankFilter::RankTwo => "rank_two",
            RankFilter::RankThree => "rank_three",
        };
        f.write_str(name)
    }
}

/// Tier of a spell as read from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankTier {
    One,
    Two,
    Three,
}

impl RankTier {
    pub fn of(name: &str) -> Self {
        if name.ends_with("III") {
            RankTier::Three
        } else if name.ends_with("II") {
            RankTier::Two
        } else {
            RankTier::One
        }
    }
}

fn is_placeholder(name: &str) -> bool {
    name.len() < MIN_NAME_LEN
}

fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = name.len().checked_sub(suffix.len())?;
    if !name.is_char_boundary(cut) || !name[cut..].eq_ignore_ascii_case(suffix) {
        return None;
    }
    Some(&name[..cut])
}

/// Base name a rank II or III reprint replaces
///
/// Strips the "Rk. II" / "Rk.II" (or "III") marker, falling back to the
/// bare numeral, then trims trailing spaces. Rank I names and names that
/// reduce to nothing have no base.
pub fn infer_base_name(name: &str) -> Option<String> {
    let (markers, numeral): (&[&str], &str) = match RankTier::of(name) {
        RankTier::One => return None,
        RankTier::Two => (&["Rk. II", "Rk.II"], "II"),
        RankTier::Three => (&["Rk. III", "Rk.III"], "III"),
    };

    let stem = markers
        .iter()
        .find_map(|marker| strip_suffix_ignore_case(name, marker))
        .or_else(|| name.strip_suffix(numeral))?;

    let base = stem.trim_end_matches(' ');
    (!base.is_empty()).then(|| base.to_string())
}

/// Thin one category list in place, returning how many entries were dropped
pub fn reduce(list: &mut Vec<CapabilityEntry>, filter: RankFilter) -> usize {
    let before = list.len();

    match filter {
        RankFilter::AllRanks => list.retain(|entry| !is_placeholder(entry.name())),
        RankFilter::RankOne => list.retain(|entry| {
            !is_placeholder(entry.name()) && RankTier::of(entry.name()) == RankTier::One
        }),
        RankFilter::RankTwo => keep_tier(list, RankTier::Two, RankTier::Three),
        RankFilter::RankThree => keep_tier(list, RankTier::Three, RankTier::Two),
    }

    before - list.len()
}

/// Keep `keep` reprints, drop `discard` reprints, then drop every entry
/// named after a base spell that a kept reprint replaces
fn keep_tier(list: &mut Vec<CapabilityEntry>, keep: RankTier, discard: RankTier) {
    let mut replaced: AHashSet<String> = AHashSet::new();

    list.retain(|entry| {
        let name = entry.name();
        if is_placeholder(name) {
            return false;
        }
        let tier = RankTier::of(name);
        if tier == discard {
            return false;
        }
        if tier == keep {
            if let Some(base) = infer_base_name(name) {
                replaced.insert(base.to_ascii_lowercase());
            }
        }
        true
    });

    if replaced.is_empty() {
        return;
    }
    list.retain(|entry| !replaced.contains(&entry.name().to_ascii_lowercase()));
}
