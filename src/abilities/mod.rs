//! Ability content: definitions and the catalog they live in.
//!
//! - `Ability`: immutable record; behaviour selected by `AbilityEffect`
//! - `BuffTemplate` / `DebuffTemplate`: timed effects an ability attaches
//! - `AbilityCatalog`: key-validated lookup table

mod definition;
mod registry;

pub use definition::{
    Ability, AbilityEffect, BuffEffect, BuffTemplate, DebuffEffect, DebuffTemplate, TargetAlignment,
    TargetShape,
};
pub use registry::AbilityCatalog;
