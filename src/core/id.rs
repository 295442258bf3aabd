//! Identifier types.
//!
//! Every combatant carries a `CharacterId`; catalog records are addressed by
//! `AbilityId` and `TemplateId`. String keys from content tables are resolved
//! to these once, at catalog lookup, so an unknown key fails before a battle
//! is ever constructed.
//!
//! ## Usage
//!
//! ```
//! use rust_skirmish::core::{CharacterId, TemplateId};
//!
//! let id = CharacterId::new(3);
//! assert_eq!(id.raw(), 3);
//! assert_eq!(id.to_string(), "Character(3)");
//! assert_eq!(TemplateId::new(3).to_string(), "Template(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a combatant.
///
/// The engine renumbers combatants by their slot in the battle. Used as a
/// plain attribution tag: holding one grants no access to the
/// character and says nothing about whether it is still in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// Validated key of an ability in an `AbilityCatalog`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AbilityId(pub u16);

impl AbilityId {
    /// Create a new ability ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

/// Validated key of a character template in a `TemplateCatalog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(CharacterId::new(1) < CharacterId::new(2));
        assert_eq!(CharacterId::new(7).raw(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(AbilityId::new(2).to_string(), "Ability(2)");
        assert_eq!(TemplateId::new(5).to_string(), "Template(5)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = CharacterId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: CharacterId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
