//! Error types for catalog construction and batch runs.
//!
//! A battle itself never fails: once teams are built, every numeric result
//! is clamped rather than reported.

use thiserror::Error;

/// Errors raised while building or querying content catalogs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown character template {0:?}")]
    UnknownTemplate(String),

    #[error("unknown ability {0:?}")]
    UnknownAbility(String),

    #[error("duplicate catalog key {0:?}")]
    DuplicateKey(String),

    #[error("catalog is full")]
    Full,

    #[error("template {template:?} unlocks unknown ability {ability:?}")]
    DanglingUnlock { template: String, ability: String },

    #[error("template {template:?} has a negative or non-finite {stat}")]
    InvalidStat { template: String, stat: String },
}

/// Errors raised by the batch driver.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
