//! Ability catalog for definition lookup.
//!
//! The `AbilityCatalog` stores every ability for a content set. Records are
//! handed out as `Arc<Ability>` so characters can hold read-only references
//! that outlive any single battle.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::core::{AbilityId, CatalogError};

use super::definition::Ability;

/// Catalog of ability definitions.
///
/// ## Example
///
/// ```
/// use rust_skirmish::abilities::{Ability, AbilityCatalog};
/// use rust_skirmish::core::Element;
///
/// let mut catalog = AbilityCatalog::new();
/// let id = catalog.register(Ability::attack("bash", 30.0, Element::Wild)).unwrap();
///
/// assert_eq!(catalog.resolve("bash").unwrap(), id);
/// assert_eq!(catalog.get(id).unwrap().power, 30.0);
/// assert!(catalog.resolve("zap").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    abilities: Vec<Arc<Ability>>,
    by_key: FxHashMap<String, AbilityId>,
}

impl AbilityCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability, assigning it the next ID.
    ///
    /// Fails if an ability with the same key already exists.
    pub fn register(&mut self, mut ability: Ability) -> Result<AbilityId, CatalogError> {
        if self.by_key.contains_key(&ability.key) {
            return Err(CatalogError::DuplicateKey(ability.key));
        }
        let raw = u16::try_from(self.abilities.len()).map_err(|_| CatalogError::Full)?;
        let id = AbilityId::new(raw);
        ability.id = id;
        self.by_key.insert(ability.key.clone(), id);
        self.abilities.push(Arc::new(ability));
        Ok(id)
    }

    /// Resolve a content key to its validated ID.
    pub fn resolve(&self, key: &str) -> Result<AbilityId, CatalogError> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| CatalogError::UnknownAbility(key.to_string()))
    }

    /// Get an ability by ID.
    #[must_use]
    pub fn get(&self, id: AbilityId) -> Option<&Arc<Ability>> {
        self.abilities.get(usize::from(id.raw()))
    }

    /// Get an ability by content key.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&Arc<Ability>> {
        self.by_key.get(key).and_then(|id| self.get(*id))
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Get the number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Iterate over all abilities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Ability>> {
        self.abilities.iter()
    }
}
