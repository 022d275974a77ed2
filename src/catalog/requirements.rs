//! "Who can do this" requirement strings

use crate::catalog::expander::LevelMap;
use crate::core::types::{cmp_ignore_case, PlayerClass};
use ahash::AHashMap;
use std::cmp::Ordering;

pub const CATEGORY_UNAVAILABLE: &str = "This command is currently unavailable...";
pub const CLASS_UNAVAILABLE: &str = "Unavailable...";

/// Requirement text for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    /// e.g. "Cleric(5), Druid(5) or Wizard(10)"
    pub summary: String,
    by_class: AHashMap<PlayerClass, String>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl Requirements {
    /// Nobody can do this
    pub fn unavailable() -> Self {
        Self {
            summary: CATEGORY_UNAVAILABLE.to_string(),
            by_class: AHashMap::new(),
        }
    }

    /// Build the summary by repeatedly pulling the best remaining class:
    /// lowest level first, class name breaking ties
    pub fn from_levels(levels: &LevelMap) -> Self {
        if levels.is_empty() {
            return Self::unavailable();
        }

        let mut remaining: Vec<(PlayerClass, u8)> =
            levels.iter().map(|(&class, &level)| (class, level)).collect();
        let total = remaining.len();
        let mut summary = String::new();
        let mut by_class = AHashMap::with_capacity(total);

        while !remaining.is_empty() {
            let pick = next_pick(&remaining);
            let (class, level) = remaining.remove(pick);
            let fragment = format!("{}({})", class.name(), level);

            if remaining.len() + 1 == total {
                summary.push_str(&fragment);
            } else if !remaining.is_empty() {
                summary.push_str(", ");
                summary.push_str(&fragment);
            } else {
                summary.push_str(" or ");
                summary.push_str(&fragment);
            }
            by_class.insert(class, fragment);
        }

        Self { summary, by_class }
    }

    /// Requirement text for a single class
    pub fn for_class(&self, class: PlayerClass) -> &str {
        self.by_class
            .get(&class)
            .map(String::as_str)
            .unwrap_or(CLASS_UNAVAILABLE)
    }

    pub fn is_available(&self) -> bool {
        !self.by_class.is_empty()
    }
}

fn next_pick(remaining: &[(PlayerClass, u8)]) -> usize {
    let mut pick = 0;
    for (index, &(class, level)) in remaining.iter().enumerate() {
        if level < remaining[pick].1 {
            pick = index;
        }
        let (best_class, best_level) = remaining[pick];
        if cmp_ignore_case(class.name(), best_class.name()) == Ordering::Less && level <= best_level {
            pick = index;
        }
    }
    pick
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(pairs: &[(PlayerClass, u8)]) -> LevelMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_empty_is_unavailable() {
        let req = Requirements::from_levels(&LevelMap::new());
        assert_eq!(req.summary, CATEGORY_UNAVAILABLE);
        assert_eq!(req.for_class(PlayerClass::Cleric), CLASS_UNAVAILABLE);
        assert!(!req.is_available());
    }

    #[test]
    fn test_single_class() {
        let req = Requirements::from_levels(&levels(&[(PlayerClass::Wizard, 4)]));
        assert_eq!(req.summary, "Wizard(4)");
        assert_eq!(req.for_class(PlayerClass::Wizard), "Wizard(4)");
    }

    #[test]
    fn test_two_classes_use_or() {
        let req = Requirements::from_levels(&levels(&[
            (PlayerClass::Wizard, 4),
            (PlayerClass::Druid, 4),
        ]));
        assert_eq!(req.summary, "Druid(4) or Wizard(4)");
    }

    #[test]
    fn test_lowest_level_first_then_name() {
        let req = Requirements::from_levels(&levels(&[
            (PlayerClass::Wizard, 10),
            (PlayerClass::Druid, 5),
            (PlayerClass::Cleric, 5),
        ]));
        assert_eq!(req.summary, "Cleric(5), Druid(5) or Wizard(10)");
        assert_eq!(req.for_class(PlayerClass::Druid), "Druid(5)");
        assert_eq!(req.for_class(PlayerClass::Wizard), "Wizard(10)");
        assert_eq!(req.for_class(PlayerClass::Bard), CLASS_UNAVAILABLE);
    }

    #[test]
    fn test_name_only_wins_at_equal_or_lower_level() {
        let req = Requirements::from_levels(&levels(&[
            (PlayerClass::Beastlord, 20),
            (PlayerClass::Shaman, 9),
            (PlayerClass::Enchanter, 9),
            (PlayerClass::Bard, 12),
        ]));
        assert_eq!(
            req.summary,
            "Enchanter(9), Shaman(9), Bard(12) or Beastlord(20)"
        );
    }
}
