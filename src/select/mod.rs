//! Runtime selection of a spell and a caster for a bot command

pub mod request;
pub mod selector;

pub use request::{Actor, SelectionRequest, SpellFilter, TargetDescriptor};
pub use selector::{list_destinations, select, zone_allows, Selection};
