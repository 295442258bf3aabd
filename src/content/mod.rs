//! Content sets: the ability and template catalogs a batch runs against.
//!
//! [`Catalog::builtin`] holds the shipped roster. Custom rosters can be
//! loaded from JSON with [`Catalog::from_json_str`]; keys are validated the
//! same way in both cases.

mod abilities;
mod templates;

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::abilities::{Ability, AbilityCatalog};
use crate::core::{CatalogError, SimError};
use crate::roster::{CharacterTemplate, TeamFactory, TemplateCatalog};

pub use abilities::builtin_abilities;
pub use templates::builtin_templates;

/// Raw content tables, as stored in a content file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentTables {
    pub abilities: Vec<Ability>,
    pub templates: Vec<CharacterTemplate>,
}

/// Validated ability and template catalogs.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub abilities: AbilityCatalog,
    pub templates: TemplateCatalog,
}

static SHARED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

impl Catalog {
    /// Register every ability, then every template.
    pub fn from_tables(tables: ContentTables) -> Result<Self, CatalogError> {
        let mut abilities = AbilityCatalog::new();
        for ability in tables.abilities {
            abilities.register(ability)?;
        }
        let mut templates = TemplateCatalog::new();
        for template in tables.templates {
            templates.register(template, &abilities)?;
        }
        Ok(Self { abilities, templates })
    }

    /// Parse and validate a JSON content file.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let tables: ContentTables = serde_json::from_str(json)?;
        Ok(Self::from_tables(tables)?)
    }

    /// The shipped content set.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_tables(ContentTables {
            abilities: builtin_abilities(),
            templates: builtin_templates(),
        })
    }

    /// Process-wide copy of [`Catalog::builtin`], built on first use.
    pub fn shared() -> Result<&'static Catalog, CatalogError> {
        SHARED.get_or_init(Self::builtin).as_ref().map_err(Clone::clone)
    }

    /// A factory building teams from this catalog.
    #[must_use]
    pub fn factory(&self) -> TeamFactory<'_> {
        TeamFactory::new(&self.abilities, &self.templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{AbilityEffect, DebuffEffect, TargetAlignment};
    use crate::core::{Element, Side};

    #[test]
    fn test_builtin_is_consistent() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.abilities.len(), 40);
        assert_eq!(catalog.templates.len(), 18);
    }

    #[test]
    fn test_shared_is_cached() {
        let a = Catalog::shared().unwrap();
        let b = Catalog::shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_builtin_entries() {
        let catalog = Catalog::shared().unwrap();

        let soak = catalog.abilities.by_key("soak").unwrap();
        assert_eq!(soak.alignment, TargetAlignment::Any);
        assert!(matches!(
            soak.effect,
            AbilityEffect::Debuff(d)
                if d.effect == DebuffEffect::ElementAttach { element: Element::Water }
        ));

        let spore_shot = catalog.abilities.by_key("spore-shot").unwrap();
        assert_eq!(spore_shot.debuff_template().unwrap().chance_pct, 50.0);
        assert!(spore_shot.is_regen());

        let husk = catalog.templates.by_key("gravebound_husk").unwrap();
        assert_eq!(husk.elements, vec![Element::Earth, Element::Dark]);
    }

    #[test]
    fn test_builtin_team_at_level_ten() {
        let catalog = Catalog::shared().unwrap();
        let team = catalog
            .factory()
            .build_named(&["sporepuff", "mycera"], 10, Side::Ally)
            .unwrap();
        assert_eq!(team[0].abilities.len(), 4);
        assert_eq!(team[1].max_health, 95.0);
        assert_eq!(team[1].mana, 2.0);
    }

    #[test]
    fn test_json_content() {
        let json = r#"{
            "abilities": [
                {"key": "poke", "power": 10, "effect": {"attack": {"on_hit": null}},
                 "shape": "single", "alignment": "enemy", "element": "wild"}
            ],
            "templates": [
                {"key": "dummy", "elements": ["wild"],
                 "base": {"health": 20, "mana": 2}, "growth": {"health": 1},
                 "unlocks": [{"ability": "poke", "min_level": 0}]}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let team = catalog.factory().build_named(&["dummy"], 5, Side::Enemy).unwrap();
        assert_eq!(team[0].max_health, 25.0);
        assert_eq!(team[0].abilities[0].key, "poke");

        let dangling = json.replace(r#""ability": "poke""#, r#""ability": "prod""#);
        assert!(matches!(
            Catalog::from_json_str(&dangling),
            Err(SimError::Catalog(CatalogError::DanglingUnlock { .. }))
        ));
    }
}
