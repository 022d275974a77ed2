//! Spell capability catalog
//!
//! Builds per-category, priority-ordered lists of the spells bots can cast
//! on command, plus the "who can do this" text for each category.

pub mod builder;
pub mod category;
pub mod classifier;
pub mod dump;
pub mod entry;
pub mod expander;
pub mod ranking;
pub mod reducer;
pub mod requirements;
pub mod store;
pub mod zones;

pub use builder::{build_catalog, SpellCatalog};
pub use category::SpellCategory;
pub use classifier::{classify_capability, Classification, Classifier};
pub use entry::{
    Capability, CapabilityEntry, CureMask, CureProfile, InvisibilityKind, ResistMask,
    ResistanceProfile,
};
pub use reducer::{infer_base_name, RankFilter};
pub use requirements::{Requirements, CATEGORY_UNAVAILABLE, CLASS_UNAVAILABLE};
pub use store::CatalogStore;
pub use zones::{ZoneDirectory, ZoneNameResolver};
