//! Combatant state.
//!
//! A `Character` is created by the team factory (or a test) at battle start
//! and mutated only by the resolver and the round ticker while the battle
//! runs. Its abilities are shared, read-only catalog records.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::abilities::Ability;
use crate::core::{CharacterId, Element, Side, StatusTag};

use super::effects::{BuffInstance, DebuffInstance};

/// A stateful combatant.
///
/// ## Example
///
/// ```
/// use rust_skirmish::battle::Character;
/// use rust_skirmish::core::{CharacterId, Element, Side};
///
/// let mut pup = Character::new(CharacterId::new(1), "pup", Side::Ally)
///     .with_health(60.0)
///     .with_mana(2.0, 4.0)
///     .with_elements(&[Element::Wild]);
///
/// pup.take_damage(100.0);
/// assert_eq!(pup.health, 0.0);
/// assert!(!pup.is_alive());
/// ```
#[derive(Clone, Debug)]
pub struct Character {
    pub id: CharacterId,
    /// Display name, usually the template key.
    pub name: Arc<str>,
    pub side: Side,
    pub level: u32,

    pub health: f64,
    pub max_health: f64,
    pub mana: f64,
    pub max_mana: f64,

    pub strength: f64,
    pub defense: f64,
    pub spirit: f64,
    pub speed: f64,
    /// Base miss chance in `[0, 1]`.
    pub evasion: f64,

    /// Remaining shield charges; each negates one hostile cast.
    pub shields: u32,

    /// Current affinities. Can grow during a battle, never shrinks.
    pub elements: SmallVec<[Element; 2]>,

    pub abilities: SmallVec<[Arc<Ability>; 4]>,

    pub buffs: Vec<BuffInstance>,
    pub debuffs: Vec<DebuffInstance>,
}

impl Character {
    /// Create a level-1 character with 100 health and no mana.
    pub fn new(id: CharacterId, name: impl Into<Arc<str>>, side: Side) -> Self {
        Self {
            id,
            name: name.into(),
            side,
            level: 1,
            health: 100.0,
            max_health: 100.0,
            mana: 0.0,
            max_mana: 0.0,
            strength: 5.0,
            defense: 5.0,
            spirit: 5.0,
            speed: 5.0,
            evasion: 0.0,
            shields: 0,
            elements: SmallVec::new(),
            abilities: SmallVec::new(),
            buffs: Vec::new(),
            debuffs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set max health and fill to it.
    #[must_use]
    pub fn with_health(mut self, max: f64) -> Self {
        self.max_health = max;
        self.health = max;
        self
    }

    /// Set max mana (floored at zero) and the current mana within it.
    #[must_use]
    pub fn with_mana(mut self, current: f64, max: f64) -> Self {
        self.max_mana = max.max(0.0);
        self.mana = current.clamp(0.0, self.max_mana);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, strength: f64, defense: f64, spirit: f64, speed: f64) -> Self {
        self.strength = strength;
        self.defense = defense;
        self.spirit = spirit;
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_evasion(mut self, evasion: f64) -> Self {
        self.evasion = evasion;
        self
    }

    #[must_use]
    pub fn with_elements(mut self, elements: &[Element]) -> Self {
        self.elements = SmallVec::from_slice(elements);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Arc<Ability>) -> Self {
        self.abilities.push(ability);
        self
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Current health over max health; 0 when max health is 0.
    #[must_use]
    pub fn health_fraction(&self) -> f64 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    /// Current mana over max mana; 0 when max mana is 0.
    #[must_use]
    pub fn mana_fraction(&self) -> f64 {
        if self.max_mana > 0.0 {
            self.mana / self.max_mana
        } else {
            0.0
        }
    }

    /// Abilities this character can pay for right now.
    pub fn affordable_abilities(&self) -> impl Iterator<Item = &Arc<Ability>> + '_ {
        self.abilities.iter().filter(move |ability| ability.affordable(self.mana))
    }

    /// Lose health, floored at zero.
    pub fn take_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Regain health, capped at max.
    pub fn restore_health(&mut self, amount: f64) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// Pay a mana cost (negative costs regenerate), clamped to `[0, max]`.
    pub fn spend_mana(&mut self, cost: f64) {
        self.mana = (self.mana - cost).clamp(0.0, self.max_mana);
    }

    #[must_use]
    pub fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Add an affinity. Returns false if it was already present.
    pub fn add_element(&mut self, element: Element) -> bool {
        if self.has_element(element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Is any debuff with this tag active?
    #[must_use]
    pub fn has_debuff(&self, tag: StatusTag) -> bool {
        self.debuffs.iter().any(|d| d.tag == tag)
    }

    /// Sum of active buff percentages for a tag.
    #[must_use]
    pub fn buff_total(&self, tag: StatusTag) -> f64 {
        self.buffs.iter().filter(|b| b.tag == tag).map(|b| b.modifier_pct).sum()
    }

    /// Sum of active debuff percentages for a tag.
    #[must_use]
    pub fn debuff_total(&self, tag: StatusTag) -> f64 {
        self.debuffs.iter().filter(|d| d.tag == tag).map(|d| d.modifier_pct).sum()
    }
}
