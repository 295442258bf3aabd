//! # rust-skirmish
//!
//! A turn-based team combat resolver with pluggable decision policies.
//!
//! ## Design Principles
//!
//! 1. **Content as Data**: Abilities and character templates are plain
//!    records in key-validated catalogs. Unknown keys fail at resolution
//!    time, before a team is ever built.
//!
//! 2. **Battles Never Fail**: Once teams exist, every numeric result is
//!    clamped. A battle always ends, at the latest when the round cap hits.
//!
//! 3. **Deterministic Under a Seed**: Every battle owns its RNG. The batch
//!    driver derives one stream per matchup so parallel runs reproduce.
//!
//! ## Architecture
//!
//! - **Engine / Policy split**: The engine owns turn order, resolution and
//!   bookkeeping. A `DecisionPolicy` only picks an ability and targets from
//!   read-only views of the living combatants.
//!
//! - **Impact records**: Every health change in a step is reported as an
//!   `ImpactRecord`, which is all the statistics layer consumes.
//!
//! ## Modules
//!
//! - `core`: IDs, elements, sides, RNG, battle configuration, errors
//! - `abilities`: Ability definitions and their catalog
//! - `roster`: Character templates, template catalog, team factory
//! - `content`: The built-in abilities and templates
//! - `battle`: Characters, timed effects, resolver, round ticker, engine
//! - `policy`: Decision policies (uniform random and utility-scored)
//! - `sim`: Parallel batch runs and reports

pub mod core;
pub mod abilities;
pub mod roster;
pub mod content;
pub mod battle;
pub mod policy;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    AbilityId, CharacterId, TemplateId,
    Element, Side, StatusTag,
    BattleRng, BattleConfig,
    CatalogError, SimError,
};

pub use crate::abilities::{
    Ability, AbilityEffect, AbilityCatalog,
    BuffEffect, BuffTemplate, DebuffEffect, DebuffTemplate,
    TargetAlignment, TargetShape,
};

pub use crate::roster::{CharacterTemplate, StatBlock, TeamFactory, TemplateCatalog};

pub use crate::content::Catalog;

pub use crate::battle::{
    BattleStatus, Character, EffectResolver, Engine, ImpactRecord, Outcome, RoundTicker,
};

pub use crate::policy::{
    Decision, DecisionPolicy, PolicyKind, Target,
    UniformPolicy, UtilityPolicy, UtilityWeights,
};

pub use crate::sim::{BatchReport, BatchRunner, BatchTally, SimConfig};
