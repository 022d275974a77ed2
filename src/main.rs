//! Botcast - Entry Point
//!
//! Builds the spell capability catalog from a JSON spell table and lets an
//! operator inspect it or try a selection from the command line.

use botcast::catalog::dump::write_dump;
use botcast::catalog::{
    CatalogStore, CureMask, InvisibilityKind, ResistMask, SpellCategory, ZoneDirectory,
};
use botcast::core::error::{CatalogError, Result};
use botcast::core::{BodyType, CatalogConfig, PlayerClass};
use botcast::select::{
    list_destinations, select, Actor, SelectionRequest, SpellFilter, TargetDescriptor,
};
use botcast::spells::JsonSpellTable;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bot spell catalog inspector
#[derive(Parser, Debug)]
#[command(name = "botcast")]
#[command(about = "Classify, rank and select bot command spells")]
struct Args {
    /// Spell table (JSON array of spell records)
    #[arg(long)]
    spells: PathBuf,

    /// Zone names (TOML with a [zones] table)
    #[arg(long)]
    zones: Option<PathBuf>,

    /// Catalog config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-category entry counts and requirement strings
    Summary,
    /// Full diagnostic dump to stdout
    Dump,
    /// Depart destinations reachable by the given bots
    Destinations {
        /// Bot as Class:level[:companion][:group], repeatable
        #[arg(long = "actor")]
        actors: Vec<String>,
    },
    /// Pick a spell and a bot for a command
    Select {
        /// Category key, e.g. cure or movement_speed
        category: String,

        /// Category argument: ailments/resists (comma separated),
        /// invisibility kind, lesser, zone short name, or area
        #[arg(long)]
        filter: Option<String>,

        /// Zone type mask of the current zone
        #[arg(long, default_value_t = 0)]
        zone_type: i32,

        /// Only consider this caster class
        #[arg(long)]
        class: Option<String>,

        /// player, grouped-player, corpse or hostile:LEVEL[:BODY][:charmed]
        #[arg(long, default_value = "player")]
        target: String,

        /// Bot as Class:level[:companion][:group], repeatable
        #[arg(long = "actor")]
        actors: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("botcast=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    let zones = match &args.zones {
        Some(path) => ZoneDirectory::load(path)?,
        None => {
            tracing::warn!("No zone names given - depart spells will be dropped");
            ZoneDirectory::new()
        }
    };

    let store = CatalogStore::new();
    let catalog = store.load(&JsonSpellTable::new(&args.spells), &zones, &config)?;

    match args.command {
        Command::Summary => {
            for category in SpellCategory::ALL {
                println!(
                    "{:<16} {:>5}  {}",
                    category.key(),
                    catalog.entries(category).len(),
                    catalog.requirement_summary(category)
                );
            }
            println!("Total entries: {}", catalog.total_entries());
        }
        Command::Dump => {
            write_dump(&catalog, std::io::stdout().lock())?;
        }
        Command::Destinations { actors } => {
            let pool = parse_pool(&actors)?;
            let destinations = list_destinations(&catalog, &pool);
            if destinations.is_empty() {
                println!("No bots are capable of performing this action");
            }
            for found in destinations {
                println!(
                    "{} - {} ({})",
                    found.entry.as_depart().unwrap_or_default(),
                    found.entry.name(),
                    found.actor.name
                );
            }
        }
        Command::Select {
            category,
            filter,
            zone_type,
            class,
            target,
            actors,
        } => {
            let category: SpellCategory = category.parse()?;
            let mut request = SelectionRequest::new(category).with_zone_type(zone_type);
            if let Some(filter) = filter {
                request = request.with_filter(parse_filter(category, &filter)?);
            }
            if let Some(class) = class {
                request = request.with_caster_class(parse_class(&class)?);
            }
            let target = parse_target(&target)?;
            let pool = parse_pool(&actors)?;

            match select(&catalog, &request, Some(&target), &pool) {
                Some(selection) => println!(
                    "{} ({} {}) casts {} [{}]",
                    selection.actor.name,
                    selection.actor.class,
                    selection.actor.level,
                    selection.entry.name(),
                    selection.entry.id()
                ),
                None => {
                    println!("No bots are capable of performing this action");
                    println!("Required: {}", catalog.requirement_summary(category));
                }
            }
        }
    }

    Ok(())
}

fn parse_class(name: &str) -> Result<PlayerClass> {
    PlayerClass::from_name(name).ok_or_else(|| CatalogError::UnknownClass(name.to_string()))
}

/// "Class:level[:companion][:group]"
fn parse_actor(index: usize, arg: &str) -> Result<Actor> {
    let mut parts = arg.split(':');
    let class = parse_class(parts.next().unwrap_or_default())?;
    let level = parts
        .next()
        .and_then(|level| level.trim().parse::<u8>().ok())
        .ok_or_else(|| CatalogError::Config(format!("bad actor level in '{}'", arg)))?;

    let mut actor = Actor::new(index as u32 + 1, format!("{}{}", class, index + 1), class, level);
    for flag in parts {
        match flag.trim() {
            "companion" => actor = actor.with_companion(),
            "group" => actor = actor.in_target_group(),
            other => {
                return Err(CatalogError::Config(format!("unknown actor flag '{}'", other)));
            }
        }
    }
    Ok(actor)
}

fn parse_pool(args: &[String]) -> Result<Vec<Actor>> {
    args
        .iter()
        .enumerate()
        .map(|(index, arg)| parse_actor(index, arg))
        .collect()
}

fn parse_body(name: &str) -> Result<BodyType> {
    match name.to_ascii_lowercase().as_str() {
        "humanoid" => Ok(BodyType::Humanoid),
        "animal" => Ok(BodyType::Animal),
        "undead" => Ok(BodyType::Undead),
        "summoned" => Ok(BodyType::Summoned),
        "plant" => Ok(BodyType::Plant),
        _ => Err(CatalogError::Config(format!("unknown body type '{}'", name))),
    }
}

fn parse_target(arg: &str) -> Result<TargetDescriptor> {
    let mut parts = arg.split(':');
    match parts.next().unwrap_or_default() {
        "player" => Ok(TargetDescriptor::Player {
            grouped_with_caller: false,
        }),
        "grouped-player" => Ok(TargetDescriptor::Player {
            grouped_with_caller: true,
        }),
        "corpse" => Ok(TargetDescriptor::Corpse),
        "hostile" => {
            let level = parts
                .next()
                .and_then(|level| level.parse::<u8>().ok())
                .ok_or_else(|| CatalogError::Config(format!("bad hostile level in '{}'", arg)))?;
            let mut body = BodyType::Humanoid;
            let mut charmed = false;
            for part in parts {
                if part == "charmed" {
                    charmed = true;
                } else {
                    body = parse_body(part)?;
                }
            }
            Ok(TargetDescriptor::Hostile {
                level,
                body,
                charmed,
            })
        }
        other => Err(CatalogError::Config(format!("unknown target '{}'", other))),
    }
}

fn parse_filter(category: SpellCategory, value: &str) -> Result<SpellFilter> {
    let bad = || CatalogError::Config(format!("bad filter '{}' for {}", value, category));
    let filter = match category {
        SpellCategory::Cure => {
            let mut mask = CureMask::empty();
            for name in value.split(',') {
                mask |= CureMask::from_name(&name.trim().to_ascii_uppercase()).ok_or_else(bad)?;
            }
            SpellFilter::Ailment(mask)
        }
        SpellCategory::Resistance => {
            let mut mask = ResistMask::empty();
            for name in value.split(',') {
                mask |= ResistMask::from_name(&name.trim().to_ascii_uppercase()).ok_or_else(bad)?;
            }
            SpellFilter::Resistance(mask)
        }
        SpellCategory::Invisibility => SpellFilter::Invisibility(value.parse::<InvisibilityKind>()?),
        SpellCategory::Escape => SpellFilter::Escape {
            lesser: value.eq_ignore_ascii_case("lesser"),
        },
        SpellCategory::Depart => SpellFilter::Destination(value.to_string()),
        SpellCategory::Resurrect => SpellFilter::AreaEffect(value.eq_ignore_ascii_case("area")),
        _ => return Err(bad()),
    };
    Ok(filter)
}
