//! Team construction from templates.

use smallvec::SmallVec;

use crate::abilities::AbilityCatalog;
use crate::battle::Character;
use crate::core::{CatalogError, CharacterId, Side, TemplateId};

use super::registry::TemplateCatalog;

/// Builds battle-ready characters from catalog templates.
///
/// Each stat is `base + growth * level`. Health starts full, mana starts at
/// half of its maximum, and the loadout is every unlock whose minimum level
/// is at most the character's level.
#[derive(Clone, Copy, Debug)]
pub struct TeamFactory<'a> {
    abilities: &'a AbilityCatalog,
    templates: &'a TemplateCatalog,
}

impl<'a> TeamFactory<'a> {
    #[must_use]
    pub fn new(abilities: &'a AbilityCatalog, templates: &'a TemplateCatalog) -> Self {
        Self { abilities, templates }
    }

    /// Build one character per template, in order.
    ///
    /// Characters are numbered by their position in `team`.
    ///
    /// # Panics
    ///
    /// If an id was not issued by this factory's template catalog.
    #[must_use]
    pub fn build(&self, team: &[TemplateId], level: u32, side: Side) -> Vec<Character> {
        team.iter()
            .enumerate()
            .map(|(index, &id)| self.build_one(id, CharacterId::new(index as u32), level, side))
            .collect()
    }

    /// Resolve template keys and build the team.
    pub fn build_named<S: AsRef<str>>(
        &self,
        keys: &[S],
        level: u32,
        side: Side,
    ) -> Result<Vec<Character>, CatalogError> {
        let ids = self.templates.resolve_all(keys)?;
        Ok(self.build(&ids, level, side))
    }

    fn build_one(
        &self,
        template_id: TemplateId,
        id: CharacterId,
        level: u32,
        side: Side,
    ) -> Character {
        let Some(template) = self.templates.get(template_id) else {
            panic!("{template_id} is not in this catalog");
        };
        let stats = template.stats_at(level);

        let mut character = Character::new(id, template.key.as_str(), side)
            .with_level(level)
            .with_health(stats.health)
            .with_mana(stats.mana / 2.0, stats.mana)
            .with_stats(stats.strength, stats.defense, stats.spirit, stats.speed)
            .with_evasion(template.evasion)
            .with_elements(&template.elements);

        character.abilities = self
            .templates
            .loadout(template_id, level)
            .filter_map(|ability| self.abilities.get(ability).cloned())
            .collect::<SmallVec<_>>();
        character
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::Ability;
    use crate::core::Element;
    use crate::roster::{CharacterTemplate, StatBlock};

    fn catalogs() -> (AbilityCatalog, TemplateCatalog) {
        let mut abilities = AbilityCatalog::new();
        abilities.register(Ability::attack("bash", 30.0, Element::Wild)).unwrap();
        abilities
            .register(Ability::heal("sweet-heal", 40.0, Element::Earth).with_cost(2.0))
            .unwrap();

        let mut templates = TemplateCatalog::new();
        templates
            .register(
                CharacterTemplate::new("chocolate_chip", &[Element::Earth])
                    .with_base(StatBlock::new(30.0, 4.0, 5.0, 5.0, 5.0, 5.0))
                    .with_growth(StatBlock::new(4.0, 0.0, 2.0, 2.25, 2.25, 1.5))
                    .with_evasion(0.05)
                    .unlock("bash", 0)
                    .unlock("sweet-heal", 3),
                &abilities,
            )
            .unwrap();
        (abilities, templates)
    }

    #[test]
    fn test_build_derives_stats() {
        let (abilities, templates) = catalogs();
        let factory = TeamFactory::new(&abilities, &templates);
        let team = factory.build_named(&["chocolate_chip"], 10, Side::Enemy).unwrap();
        let chip = &team[0];

        assert_eq!(&*chip.name, "chocolate_chip");
        assert_eq!(chip.side, Side::Enemy);
        assert_eq!(chip.level, 10);
        assert_eq!(chip.health, 70.0);
        assert_eq!(chip.max_health, 70.0);
        assert_eq!(chip.max_mana, 4.0);
        assert_eq!(chip.mana, 2.0);
        assert_eq!(chip.defense, 27.5);
        assert_eq!(chip.speed, 20.0);
        assert_eq!(chip.evasion, 0.05);
        assert_eq!(chip.elements.as_slice(), &[Element::Earth]);
        assert_eq!(chip.abilities.len(), 2);
    }

    #[test]
    fn test_low_level_loadout() {
        let (abilities, templates) = catalogs();
        let factory = TeamFactory::new(&abilities, &templates);
        let team = factory
            .build_named(&["chocolate_chip", "chocolate_chip"], 2, Side::Ally)
            .unwrap();
        assert_eq!(team.len(), 2);
        assert_eq!(team[1].id, CharacterId::new(1));
        let keys: Vec<_> = team[0].abilities.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, vec!["bash"]);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let (abilities, templates) = catalogs();
        let factory = TeamFactory::new(&abilities, &templates);
        let err = factory.build_named(&["chocolate_chip", "mystery"], 5, Side::Ally).unwrap_err();
        assert_eq!(err, CatalogError::UnknownTemplate("mystery".into()));
    }

    #[test]
    fn test_elements_are_copied() {
        let (abilities, templates) = catalogs();
        let factory = TeamFactory::new(&abilities, &templates);
        let mut team = factory.build_named(&["chocolate_chip"], 1, Side::Ally).unwrap();
        team[0].add_element(Element::Water);
        assert_eq!(templates.by_key("chocolate_chip").unwrap().elements, vec![Element::Earth]);
    }
}
