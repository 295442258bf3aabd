//! Effect resolution - applying one ability cast to one target.
//!
//! The resolver never sees the caster mutably. The engine takes a
//! [`Caster`] snapshot before each target is resolved, which keeps
//! self-targeted casts free of aliasing.

use tracing::trace;

use crate::abilities::{
    Ability, AbilityEffect, BuffEffect, BuffTemplate, DebuffEffect, DebuffTemplate, TargetShape,
};
use crate::core::{elemental_multiplier, BattleConfig, BattleRng, CharacterId, StatusTag};

use super::character::Character;
use super::effects::{BuffInstance, DebuffInstance};
use super::formulas::{base_damage, base_heal, effective_evasion, spirit_scaled, stat_modifier};

/// The parts of a caster the resolver reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Caster {
    pub id: CharacterId,
    pub level: u32,
    pub strength: f64,
    pub spirit: f64,
    /// Net strength multiplier from the caster's active effects.
    pub strength_modifier: f64,
}

impl Caster {
    /// Snapshot a character as it stands right now.
    #[must_use]
    pub fn of(character: &Character, config: &BattleConfig) -> Self {
        Self {
            id: character.id,
            level: character.level,
            strength: character.strength,
            spirit: character.spirit,
            strength_modifier: stat_modifier(character, StatusTag::Strength, config),
        }
    }
}

/// What happened to one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The attack missed.
    Evaded,
    /// A shield charge absorbed the cast, including any debuff.
    Shielded,
    /// Health lost (already rounded up).
    Damaged(f64),
    /// Heal-path magnitude. Only heal abilities actually restore health.
    Restored(f64),
}

impl Outcome {
    /// Signed magnitude: positive for damage, negative for healing.
    #[must_use]
    pub fn delta(self) -> f64 {
        match self {
            Outcome::Evaded | Outcome::Shielded => 0.0,
            Outcome::Damaged(amount) => amount,
            Outcome::Restored(amount) => -amount,
        }
    }

    /// Did the cast get past evasion and shields?
    #[must_use]
    pub fn landed(self) -> bool {
        !matches!(self, Outcome::Evaded | Outcome::Shielded)
    }
}

/// Applies ability casts using one battle's numeric settings.
#[derive(Clone, Copy, Debug)]
pub struct EffectResolver<'a> {
    config: &'a BattleConfig,
}

impl<'a> EffectResolver<'a> {
    #[must_use]
    pub fn new(config: &'a BattleConfig) -> Self {
        Self { config }
    }

    /// Resolve `ability` from `caster` onto `target` during `round`.
    pub fn resolve(
        &self,
        caster: &Caster,
        target: &mut Character,
        ability: &Ability,
        round: u32,
        rng: &mut BattleRng,
    ) -> Outcome {
        match &ability.effect {
            AbilityEffect::Attack { on_hit } => {
                self.strike(caster, target, ability, on_hit.as_ref(), rng)
            }
            AbilityEffect::Debuff(debuff) => {
                self.strike(caster, target, ability, Some(debuff), rng)
            }
            AbilityEffect::Heal => {
                let amount = self.heal_amount(caster, ability, round);
                target.restore_health(amount);
                Outcome::Restored(amount)
            }
            AbilityEffect::Buff(buff) => {
                let amount = self.heal_amount(caster, ability, round);
                self.attach_buff(caster, target, buff);
                Outcome::Restored(amount)
            }
        }
    }

    /// Damage an attack would deal to `target`, before rounding.
    ///
    /// Ignores evasion and shields.
    #[must_use]
    pub fn raw_damage(&self, caster: &Caster, target: &Character, ability: &Ability) -> f64 {
        let elemental = elemental_multiplier(&target.elements, ability.element);
        let defense_modifier = stat_modifier(target, StatusTag::Defense, self.config);
        let area = match ability.shape {
            TargetShape::All => self.config.area_damage_factor,
            _ => 1.0,
        };
        base_damage(ability.power, caster.strength, caster.level, target.defense)
            * caster.strength_modifier
            * defense_modifier
            * elemental
            * area
    }

    /// Heal-path magnitude at `round`, rounded up.
    #[must_use]
    pub fn heal_amount(&self, caster: &Caster, ability: &Ability, round: u32) -> f64 {
        let base = base_heal(ability.power, caster.spirit, caster.level);
        (base * self.config.heal_multiplier(round)).ceil()
    }

    fn strike(
        &self,
        caster: &Caster,
        target: &mut Character,
        ability: &Ability,
        debuff: Option<&DebuffTemplate>,
        rng: &mut BattleRng,
    ) -> Outcome {
        if rng.roll(effective_evasion(target, self.config)) {
            return Outcome::Evaded;
        }
        if target.shields > 0 {
            target.shields -= 1;
            trace!(target = %target.id, remaining = target.shields, "shield absorbed cast");
            return Outcome::Shielded;
        }

        let damage = self.raw_damage(caster, target, ability).ceil();
        target.take_damage(damage);

        if let Some(debuff) = debuff {
            self.try_attach_debuff(caster, target, debuff, rng);
        }
        Outcome::Damaged(damage)
    }

    /// Attach a buff to `target`. Shields add charges; modifiers add a timed
    /// instance with a spirit-scaled percentage.
    pub fn attach_buff(&self, caster: &Caster, target: &mut Character, buff: &BuffTemplate) {
        match buff.effect {
            BuffEffect::Shield { charges } => {
                target.shields = target.shields.saturating_add(charges);
            }
            BuffEffect::Modifier { tag, pct } => {
                if buff.rounds == 0 {
                    return;
                }
                target.buffs.push(BuffInstance {
                    applied_by: caster.id,
                    tag,
                    modifier_pct: spirit_scaled(pct, caster.spirit),
                    total_rounds: buff.rounds,
                    rounds_applied: 0,
                });
            }
        }
    }

    /// Roll the debuff's application chance and attach it on success.
    ///
    /// Returns whether the debuff took effect. An element-attach debuff
    /// refreshes an existing instance of its tag, and otherwise does nothing
    /// when the target already carries the element.
    pub fn try_attach_debuff(
        &self,
        caster: &Caster,
        target: &mut Character,
        debuff: &DebuffTemplate,
        rng: &mut BattleRng,
    ) -> bool {
        if !rng.roll_percent(debuff.chance_pct) {
            return false;
        }

        let element_to_apply = match debuff.effect {
            DebuffEffect::ElementAttach { element } => {
                if let Some(existing) = target.debuffs.iter_mut().find(|d| d.tag == debuff.tag) {
                    existing.rounds_applied = 0;
                    return true;
                }
                if !target.add_element(element) {
                    return false;
                }
                trace!(target = %target.id, %element, "element attached");
                Some(element)
            }
            DebuffEffect::DamageOverTime { .. } | DebuffEffect::Modifier { .. } => None,
        };

        if debuff.rounds > 0 {
            target.debuffs.push(DebuffInstance {
                applied_by: caster.id,
                tag: debuff.tag,
                modifier_pct: spirit_scaled(debuff.modifier_pct(), caster.spirit),
                damage_pct: debuff.damage_pct(),
                element: debuff.element,
                element_to_apply,
                total_rounds: debuff.rounds,
                rounds_applied: 0,
            });
        }
        true
    }
}
