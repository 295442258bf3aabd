//! Character templates and team construction.
//!
//! - `CharacterTemplate`: per-species stats, growth, elements, unlocks
//! - `TemplateCatalog`: key-validated template lookup
//! - `TeamFactory`: turns templates plus a level into `Character`s

mod factory;
mod registry;
mod template;

pub use factory::TeamFactory;
pub use registry::TemplateCatalog;
pub use template::{CharacterTemplate, StatBlock, Unlock};
