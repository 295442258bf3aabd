//! Ability definitions - static content data.
//!
//! An `Ability` is immutable once registered in a catalog. Its behaviour is
//! selected by the `AbilityEffect` variant, which carries only the data that
//! variant needs.

use serde::{Deserialize, Serialize};

use crate::core::{AbilityId, Element, StatusTag};

/// Who an ability lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetShape {
    /// The caster only.
    SelfOnly,
    /// One member of the resolved pool.
    Single,
    /// Every member of the resolved pool.
    All,
}

/// Which side an ability may be aimed at, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAlignment {
    Ally,
    Enemy,
    Any,
}

/// What a buff does when attached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffEffect {
    /// Grants a flat number of shield charges.
    Shield { charges: u32 },
    /// Adds a timed percentage modifier to a stat.
    Modifier { tag: StatusTag, pct: f64 },
}

/// Buff carried by an ability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuffTemplate {
    /// Duration in rounds.
    pub rounds: u32,
    pub effect: BuffEffect,
}

impl BuffTemplate {
    /// Shield buff granting `charges` charges.
    #[must_use]
    pub const fn shield(charges: u32, rounds: u32) -> Self {
        Self {
            rounds,
            effect: BuffEffect::Shield { charges },
        }
    }

    /// Stat modifier buff.
    #[must_use]
    pub const fn modifier(tag: StatusTag, pct: f64, rounds: u32) -> Self {
        Self {
            rounds,
            effect: BuffEffect::Modifier { tag, pct },
        }
    }

    /// Raw modifier value: charge count for shields, percentage otherwise.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        match self.effect {
            BuffEffect::Shield { charges } => f64::from(charges),
            BuffEffect::Modifier { pct, .. } => pct,
        }
    }
}

/// What a debuff does when it lands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebuffEffect {
    /// Loses `damage_pct` percent of max health each round.
    DamageOverTime { damage_pct: f64 },
    /// Timed percentage penalty to the tagged stat.
    Modifier { pct: f64 },
    /// Permanently adds an elemental affinity to the target.
    ElementAttach { element: Element },
}

/// Debuff carried by an ability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebuffTemplate {
    /// Tag used for "same stat" comparisons.
    pub tag: StatusTag,
    /// Element of the effect itself (drives DoT effectiveness).
    pub element: Element,
    /// Duration in rounds.
    pub rounds: u32,
    /// Chance to land, in percent.
    pub chance_pct: f64,
    pub effect: DebuffEffect,
}

impl DebuffTemplate {
    /// Damage-over-time debuff.
    #[must_use]
    pub const fn dot(
        tag: StatusTag,
        element: Element,
        damage_pct: f64,
        rounds: u32,
        chance_pct: f64,
    ) -> Self {
        Self {
            tag,
            element,
            rounds,
            chance_pct,
            effect: DebuffEffect::DamageOverTime { damage_pct },
        }
    }

    /// Stat-penalty debuff.
    #[must_use]
    pub const fn modifier(
        tag: StatusTag,
        element: Element,
        pct: f64,
        rounds: u32,
        chance_pct: f64,
    ) -> Self {
        Self {
            tag,
            element,
            rounds,
            chance_pct,
            effect: DebuffEffect::Modifier { pct },
        }
    }

    /// Element-attach debuff, tagged [`StatusTag::Element`].
    #[must_use]
    pub const fn element_attach(element: Element, rounds: u32, chance_pct: f64) -> Self {
        Self {
            tag: StatusTag::Element,
            element,
            rounds,
            chance_pct,
            effect: DebuffEffect::ElementAttach { element },
        }
    }

    /// Per-round damage percentage, 0 unless this is a DoT.
    #[must_use]
    pub fn damage_pct(&self) -> f64 {
        match self.effect {
            DebuffEffect::DamageOverTime { damage_pct } => damage_pct,
            _ => 0.0,
        }
    }

    /// Stat penalty percentage, 0 unless this is a modifier.
    #[must_use]
    pub fn modifier_pct(&self) -> f64 {
        match self.effect {
            DebuffEffect::Modifier { pct } => pct,
            _ => 0.0,
        }
    }
}

/// Behaviour of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Direct damage, optionally with a debuff rider.
    Attack { on_hit: Option<DebuffTemplate> },
    /// Restores health.
    Heal,
    /// Attaches a buff.
    Buff(BuffTemplate),
    /// Attaches a debuff; deals damage too when power is non-zero.
    Debuff(DebuffTemplate),
}

/// Static ability record.
///
/// ## Example
///
/// ```
/// use rust_skirmish::abilities::{Ability, TargetShape};
/// use rust_skirmish::core::Element;
///
/// let quake = Ability::attack("earthquake", 70.0, Element::Earth)
///     .with_shape(TargetShape::All)
///     .with_cost(3.0);
///
/// assert!(quake.deals_damage());
/// assert!(!quake.is_regen());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Assigned by the catalog on registration.
    #[serde(default)]
    pub id: AbilityId,
    /// Content key, e.g. `"ice-shard"`.
    pub key: String,
    pub power: f64,
    pub effect: AbilityEffect,
    pub shape: TargetShape,
    pub alignment: TargetAlignment,
    /// Mana spent on cast; negative values regenerate mana.
    #[serde(default)]
    pub mana_cost: f64,
    pub element: Element,
}

impl Ability {
    fn new(
        key: impl Into<String>,
        power: f64,
        element: Element,
        effect: AbilityEffect,
        alignment: TargetAlignment,
    ) -> Self {
        Self {
            id: AbilityId::default(),
            key: key.into(),
            power,
            effect,
            shape: TargetShape::Single,
            alignment,
            mana_cost: 0.0,
            element,
        }
    }

    /// Single-target enemy attack.
    #[must_use]
    pub fn attack(key: impl Into<String>, power: f64, element: Element) -> Self {
        let effect = AbilityEffect::Attack { on_hit: None };
        Self::new(key, power, element, effect, TargetAlignment::Enemy)
    }

    /// Single-target ally heal.
    #[must_use]
    pub fn heal(key: impl Into<String>, power: f64, element: Element) -> Self {
        Self::new(key, power, element, AbilityEffect::Heal, TargetAlignment::Ally)
    }

    /// Single-target ally buff.
    #[must_use]
    pub fn buff(key: impl Into<String>, element: Element, buff: BuffTemplate) -> Self {
        Self::new(key, 0.0, element, AbilityEffect::Buff(buff), TargetAlignment::Ally)
    }

    /// Single-target enemy debuff.
    #[must_use]
    pub fn debuff(
        key: impl Into<String>,
        power: f64,
        element: Element,
        debuff: DebuffTemplate,
    ) -> Self {
        Self::new(key, power, element, AbilityEffect::Debuff(debuff), TargetAlignment::Enemy)
    }

    /// Set the target shape (builder pattern).
    #[must_use]
    pub fn with_shape(mut self, shape: TargetShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the target alignment (builder pattern).
    #[must_use]
    pub fn with_alignment(mut self, alignment: TargetAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the mana cost (builder pattern). Negative regenerates.
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.mana_cost = cost;
        self
    }

    /// Attach an on-hit debuff to an attack (builder pattern).
    ///
    /// Ignored for non-attack abilities.
    #[must_use]
    pub fn with_on_hit(mut self, debuff: DebuffTemplate) -> Self {
        if let AbilityEffect::Attack { on_hit } = &mut self.effect {
            *on_hit = Some(debuff);
        }
        self
    }

    /// Does this go through the evasion/shield/damage path?
    #[must_use]
    pub fn deals_damage(&self) -> bool {
        matches!(self.effect, AbilityEffect::Attack { .. } | AbilityEffect::Debuff(_))
    }

    #[must_use]
    pub fn is_heal(&self) -> bool {
        matches!(self.effect, AbilityEffect::Heal)
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self.effect, AbilityEffect::Attack { .. })
    }

    /// The buff this ability attaches, if any.
    #[must_use]
    pub fn buff_template(&self) -> Option<&BuffTemplate> {
        match &self.effect {
            AbilityEffect::Buff(buff) => Some(buff),
            _ => None,
        }
    }

    /// The debuff this ability may attach, if any (including attack riders).
    #[must_use]
    pub fn debuff_template(&self) -> Option<&DebuffTemplate> {
        match &self.effect {
            AbilityEffect::Debuff(debuff) => Some(debuff),
            AbilityEffect::Attack { on_hit } => on_hit.as_ref(),
            _ => None,
        }
    }

    /// Does casting this regenerate mana?
    #[must_use]
    pub fn is_regen(&self) -> bool {
        self.mana_cost < 0.0
    }

    /// Can a caster with `mana` afford this?
    #[must_use]
    pub fn affordable(&self, mana: f64) -> bool {
        mana >= self.mana_cost
    }
}
