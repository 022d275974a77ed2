//! Diagnostic text dump of a built catalog
//!
//! One line per entry with the fields the classifier and ranking looked at.
//! Read-only: writing a dump never changes the catalog.

use crate::catalog::builder::SpellCatalog;
use crate::catalog::category::SpellCategory;
use crate::catalog::entry::{Capability, CapabilityEntry};
use crate::core::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DUMPED_SLOTS: usize = 3;

fn payload(entry: &CapabilityEntry) -> Option<String> {
    match &entry.capability {
        Capability::Cure(profile) => Some(format!("(curemask){:05}", profile.mask.bits())),
        Capability::Resistance(profile) => {
            Some(format!("(resistmask){:05}", profile.mask.bits()))
        }
        Capability::Depart { long_name } => Some(format!("(longname){}", long_name)),
        Capability::Escape { lesser } => Some(format!("(lesser){}", lesser)),
        Capability::Invisibility { kind } => Some(format!("(invistype){}", kind)),
        _ => None,
    }
}

fn write_entry(out: &mut impl Write, entry: &CapabilityEntry) -> std::io::Result<()> {
    write!(
        out,
        "*(id){} (name){} (shape){} (cls){} (lvl){:03}",
        entry.id(),
        entry.name(),
        entry.shape,
        entry.class,
        entry.level
    )?;
    if let Some(payload) = payload(entry) {
        write!(out, " {}", payload)?;
    }

    let record = &entry.record;
    write!(
        out,
        " (mana){:05} (RD){:06} (ztype){:03} (desc#){:05} (SAI){:03}",
        record.mana, record.resist_diff, record.zone_type, record.desc_num, record.affect_index
    )?;
    for slot in 1..=DUMPED_SLOTS {
        let effect = record.effect(slot);
        write!(
            out,
            " (eff{slot:02}){:04} (base{slot:02}){:06} (max{slot:02}){:06}",
            effect.effect_id, effect.base, effect.max
        )?;
    }
    writeln!(out)
}

/// Write the dump for every category, in category order
pub fn write_dump(catalog: &SpellCatalog, mut out: impl Write) -> Result<()> {
    if catalog.is_empty() {
        writeln!(out, "Spell catalog is empty.")?;
        return Ok(());
    }

    let mut total = 0;
    for category in SpellCategory::ALL {
        let entries = catalog.entries(category);
        writeln!(out, "'{}' returned {} spells:", category, entries.len())?;
        for entry in entries {
            write_entry(&mut out, entry)?;
        }
        writeln!(
            out,
            "requirements[{}] = \"{}\"",
            category,
            catalog.requirement_summary(category)
        )?;
        writeln!(out)?;
        total += entries.len();
    }
    writeln!(out, "Total entry count: {}", total)?;
    Ok(())
}

/// Write the dump to a file, replacing any previous dump
pub fn write_dump_file(catalog: &SpellCatalog, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_dump(catalog, &mut out)?;
    out.flush()?;
    Ok(())
}
