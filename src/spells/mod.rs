//! Raw spell data: records, numeric codes, target shapes and table sources

pub mod codes;
pub mod record;
pub mod table;
pub mod target;

pub use record::{EffectSlot, RawSpellRecord};
pub use table::{InMemorySpellTable, JsonSpellTable, SpellTable};
pub use target::TargetShape;
