//! Battle runtime: combatants, timed effects, resolution, and the engine.
//!
//! - `Character`: mutable combatant state
//! - `EffectResolver`: one cast on one target
//! - `RoundTicker`: DoT and effect aging between rounds
//! - `Engine`: turn order, steps, termination

pub mod character;
pub mod effects;
pub mod engine;
pub mod formulas;
pub mod impact;
pub mod resolver;
pub mod ticker;

pub use character::Character;
pub use effects::{age_all, BuffInstance, DebuffInstance, TimedEffect};
pub use engine::{BattleStatus, Engine};
pub use impact::ImpactRecord;
pub use resolver::{Caster, EffectResolver, Outcome};
pub use ticker::RoundTicker;
