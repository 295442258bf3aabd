//! Character templates - static per-species data.
//!
//! A template fixes a species' elements, its base stats and per-level
//! growth, its evasion, and which abilities unlock at which level. Battle
//! state lives in `Character`, built from a template by the `TeamFactory`.

use serde::{Deserialize, Serialize};

use crate::core::Element;

/// One value per derived stat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub health: f64,
    pub mana: f64,
    pub strength: f64,
    pub defense: f64,
    pub spirit: f64,
    pub speed: f64,
}

impl StatBlock {
    #[must_use]
    pub const fn new(
        health: f64,
        mana: f64,
        strength: f64,
        defense: f64,
        spirit: f64,
        speed: f64,
    ) -> Self {
        Self {
            health,
            mana,
            strength,
            defense,
            spirit,
            speed,
        }
    }

    /// Each stat paired with its name, in field order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("health", self.health),
            ("mana", self.mana),
            ("strength", self.strength),
            ("defense", self.defense),
            ("spirit", self.spirit),
            ("speed", self.speed),
        ]
    }

    /// `self + growth * level`, stat by stat.
    #[must_use]
    pub fn grown(&self, growth: &StatBlock, level: u32) -> StatBlock {
        let l = f64::from(level);
        StatBlock {
            health: self.health + growth.health * l,
            mana: self.mana + growth.mana * l,
            strength: self.strength + growth.strength * l,
            defense: self.defense + growth.defense * l,
            spirit: self.spirit + growth.spirit * l,
            speed: self.speed + growth.speed * l,
        }
    }
}

/// An ability a template learns at `min_level`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlock {
    pub ability: String,
    pub min_level: u32,
}

/// Static species record.
///
/// ## Example
///
/// ```
/// use rust_skirmish::core::Element;
/// use rust_skirmish::roster::{CharacterTemplate, StatBlock};
///
/// let pup = CharacterTemplate::new("daring_wolfpup", &[Element::Wild])
///     .with_base(StatBlock::new(30.0, 4.0, 6.0, 5.0, 4.0, 5.0))
///     .with_growth(StatBlock::new(4.0, 0.0, 2.0, 2.0, 2.0, 2.0))
///     .unlock("bash", 0)
///     .unlock("howl", 5);
///
/// let stats = pup.stats_at(10);
/// assert_eq!(stats.health, 70.0);
/// assert_eq!(stats.mana, 4.0);
/// assert_eq!(pup.unlocked_at(4).count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    /// Content key, e.g. `"chocolate_chip"`.
    pub key: String,
    pub elements: Vec<Element>,
    pub base: StatBlock,
    pub growth: StatBlock,
    /// Base miss chance in `[0, 1]`; does not grow.
    #[serde(default)]
    pub evasion: f64,
    #[serde(default)]
    pub unlocks: Vec<Unlock>,
}

impl CharacterTemplate {
    #[must_use]
    pub fn new(key: impl Into<String>, elements: &[Element]) -> Self {
        Self {
            key: key.into(),
            elements: elements.to_vec(),
            base: StatBlock::default(),
            growth: StatBlock::default(),
            evasion: 0.0,
            unlocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: StatBlock) -> Self {
        self.base = base;
        self
    }

    #[must_use]
    pub fn with_growth(mut self, growth: StatBlock) -> Self {
        self.growth = growth;
        self
    }

    #[must_use]
    pub fn with_evasion(mut self, evasion: f64) -> Self {
        self.evasion = evasion;
        self
    }

    /// Learn `ability` from `min_level` on (builder pattern).
    #[must_use]
    pub fn unlock(mut self, ability: impl Into<String>, min_level: u32) -> Self {
        self.unlocks.push(Unlock {
            ability: ability.into(),
            min_level,
        });
        self
    }

    /// Derived stats at `level`.
    #[must_use]
    pub fn stats_at(&self, level: u32) -> StatBlock {
        self.base.grown(&self.growth, level)
    }

    /// Unlocks available at `level`, in template order.
    pub fn unlocked_at(&self, level: u32) -> impl Iterator<Item = &Unlock> {
        self.unlocks.iter().filter(move |u| u.min_level <= level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth() {
        let base = StatBlock::new(30.0, 4.0, 5.0, 5.0, 5.0, 5.0);
        let growth = StatBlock::new(4.0, 0.0, 2.0, 2.25, 2.25, 1.5);
        let at = base.grown(&growth, 10);
        assert_eq!(at, StatBlock::new(70.0, 4.0, 25.0, 27.5, 27.5, 20.0));
        assert_eq!(base.grown(&growth, 0), base);
    }

    #[test]
    fn test_unlock_gate() {
        let t = CharacterTemplate::new("chip", &[Element::Earth])
            .unlock("bash", 0)
            .unlock("blast", 1)
            .unlock("heal", 3);
        let keys: Vec<_> = t.unlocked_at(1).map(|u| u.ability.as_str()).collect();
        assert_eq!(keys, vec!["bash", "blast"]);
        assert_eq!(t.unlocked_at(3).count(), 3);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "key": "pebble",
            "elements": ["earth"],
            "base": {"health": 20, "strength": 3},
            "growth": {"health": 2}
        }"#;
        let t: CharacterTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(t.base.health, 20.0);
        assert_eq!(t.base.defense, 0.0);
        assert_eq!(t.evasion, 0.0);
        assert!(t.unlocks.is_empty());
    }
}
