//! Botcast - Bot Spell Capability Catalog

pub mod catalog;
pub mod core;
pub mod select;
pub mod spells;
