//! Core types: identifiers, elements, sides, RNG, configuration, errors.
//!
//! Everything here is independent of any particular content set. Catalogs,
//! the battle engine, and policies are built on top of these.

pub mod id;
pub mod element;
pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use id::{AbilityId, CharacterId, TemplateId};
pub use element::{elemental_multiplier, Element, ELEMENTAL_EFFECTIVENESS};
pub use side::{Side, StatusTag};
pub use rng::BattleRng;
pub use config::BattleConfig;
pub use error::{CatalogError, SimError};
