use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Spell table unavailable: {0}")]
    SpellTableUnavailable(String),

    #[error("Zone names unavailable: {0}")]
    ZoneNamesUnavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unknown spell category: {0}")]
    UnknownCategory(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
