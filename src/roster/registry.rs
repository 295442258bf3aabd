//! Template catalog with ability unlocks resolved at registration.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::abilities::AbilityCatalog;
use crate::core::{AbilityId, CatalogError, TemplateId};

use super::template::CharacterTemplate;

#[derive(Clone, Debug)]
struct Entry {
    template: Arc<CharacterTemplate>,
    /// `(min_level, ability)` in template order.
    loadout: Vec<(u32, AbilityId)>,
}

/// Catalog of character templates.
///
/// Every unlock is checked against an [`AbilityCatalog`] when the template
/// is registered, so building a team from a registered template can't hit
/// an unknown ability.
///
/// ## Example
///
/// ```
/// use rust_skirmish::abilities::{Ability, AbilityCatalog};
/// use rust_skirmish::core::{CatalogError, Element};
/// use rust_skirmish::roster::{CharacterTemplate, TemplateCatalog};
///
/// let mut abilities = AbilityCatalog::new();
/// abilities.register(Ability::attack("bash", 30.0, Element::Wild)).unwrap();
///
/// let mut templates = TemplateCatalog::new();
/// let pup = CharacterTemplate::new("pup", &[Element::Wild]).unlock("bash", 0);
/// let id = templates.register(pup, &abilities).unwrap();
/// assert_eq!(templates.resolve("pup").unwrap(), id);
///
/// let broken = CharacterTemplate::new("ghost", &[Element::Dark]).unlock("boo", 0);
/// assert!(matches!(
///     templates.register(broken, &abilities),
///     Err(CatalogError::DanglingUnlock { .. })
/// ));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TemplateCatalog {
    entries: Vec<Entry>,
    by_key: FxHashMap<String, TemplateId>,
}

impl TemplateCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, resolving its unlocks against `abilities`.
    ///
    /// Base stats and growth must be finite and non-negative, so no level
    /// yields a negative stat.
    pub fn register(
        &mut self,
        template: CharacterTemplate,
        abilities: &AbilityCatalog,
    ) -> Result<TemplateId, CatalogError> {
        if self.by_key.contains_key(&template.key) {
            return Err(CatalogError::DuplicateKey(template.key));
        }
        check_stats(&template)?;

        let mut loadout = Vec::with_capacity(template.unlocks.len());
        for unlock in &template.unlocks {
            let ability = abilities
                .resolve(&unlock.ability)
                .map_err(|_| CatalogError::DanglingUnlock {
                    template: template.key.clone(),
                    ability: unlock.ability.clone(),
                })?;
            loadout.push((unlock.min_level, ability));
        }

        let raw = u16::try_from(self.entries.len()).map_err(|_| CatalogError::Full)?;
        let id = TemplateId::new(raw);
        self.by_key.insert(template.key.clone(), id);
        self.entries.push(Entry {
            template: Arc::new(template),
            loadout,
        });
        Ok(id)
    }

    /// Resolve a content key to its validated ID.
    pub fn resolve(&self, key: &str) -> Result<TemplateId, CatalogError> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| CatalogError::UnknownTemplate(key.to_string()))
    }

    /// Resolve several keys, failing on the first unknown one.
    pub fn resolve_all<S: AsRef<str>>(&self, keys: &[S]) -> Result<Vec<TemplateId>, CatalogError> {
        keys.iter().map(|k| self.resolve(k.as_ref())).collect()
    }

    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&Arc<CharacterTemplate>> {
        self.entries.get(usize::from(id.raw())).map(|e| &e.template)
    }

    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&Arc<CharacterTemplate>> {
        self.by_key.get(key).and_then(|id| self.get(*id))
    }

    /// Abilities a character of this template knows at `level`.
    pub fn loadout(&self, id: TemplateId, level: u32) -> impl Iterator<Item = AbilityId> + '_ {
        self.entries
            .get(usize::from(id.raw()))
            .into_iter()
            .flat_map(|e| e.loadout.iter())
            .filter(move |(min_level, _)| *min_level <= level)
            .map(|(_, ability)| *ability)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TemplateId, &Arc<CharacterTemplate>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (TemplateId::new(i as u16), &e.template))
    }

    /// All template keys, sorted.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.by_key.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

fn check_stats(template: &CharacterTemplate) -> Result<(), CatalogError> {
    let blocks = [("base", &template.base), ("growth", &template.growth)];
    for (block, stats) in blocks {
        for (stat, value) in stats.named() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CatalogError::InvalidStat {
                    template: template.key.clone(),
                    stat: format!("{block} {stat}"),
                });
            }
        }
    }
    Ok(())
}
