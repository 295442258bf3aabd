//! Utility-scored roulette policy.
//!
//! Every affordable (ability, target) pair gets a heuristic score; one pair
//! is drawn with probability proportional to its score. Pairs scoring zero
//! or less are never drawn unless nothing scores above zero, in which case
//! the best pair wins outright.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::abilities::{Ability, AbilityEffect, BuffEffect, DebuffEffect, TargetShape};
use crate::battle::Character;
use crate::core::BattleRng;

use super::{Decision, DecisionPolicy, Pool, Target};

/// Tunable constants for [`UtilityPolicy`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityWeights {
    /// Health fraction below which an actor heals itself unconditionally and
    /// attacks on a target get a finishing bonus.
    pub low_health_threshold: f64,

    /// Added to the scarcity term when scoring mana-regenerating abilities.
    pub mana_crit_chance: f64,

    /// Extra regen weight when the actor's mana is already full.
    pub full_mana_bonus: f64,

    /// Upper bound of the uniform noise added to every score.
    pub jitter: f64,
}

impl Default for UtilityWeights {
    fn default() -> Self {
        Self {
            low_health_threshold: 0.3,
            mana_crit_chance: 0.34,
            full_mana_bonus: 0.6,
            jitter: 0.1,
        }
    }
}

impl UtilityWeights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score noise bound.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the low-health threshold.
    #[must_use]
    pub fn with_low_health_threshold(mut self, threshold: f64) -> Self {
        self.low_health_threshold = threshold;
        self
    }
}

/// Roulette selection over scored (ability, target) pairs.
#[derive(Clone, Debug, Default)]
pub struct UtilityPolicy {
    weights: UtilityWeights,
}

struct Candidate<'a, 'c> {
    ability: &'a Arc<Ability>,
    target: Target,
    pool: Pool<'a, 'c>,
    score: f64,
}

impl UtilityPolicy {
    #[must_use]
    pub fn new(weights: UtilityWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &UtilityWeights {
        &self.weights
    }

    /// Score casting `ability` from `actor` on `target`.
    ///
    /// `pool_size` is the number of living members in the pool the ability
    /// draws from; it only matters for area abilities.
    pub fn score(
        &self,
        actor: &Character,
        ability: &Ability,
        target: &Character,
        pool_size: usize,
        rng: &mut BattleRng,
    ) -> f64 {
        let w = &self.weights;

        let mut score = match &ability.effect {
            AbilityEffect::Heal => ability.power * (1.0 + (1.0 - target.health_fraction())),
            AbilityEffect::Buff(buff) => {
                let base = match buff.effect {
                    BuffEffect::Shield { charges } => f64::from(charges) * 15.0,
                    BuffEffect::Modifier { pct, .. } => pct * 0.3 * f64::from(buff.rounds),
                };
                base + 10.0
            }
            AbilityEffect::Debuff(debuff) => {
                let odds = debuff.chance_pct / 100.0;
                let rounds = f64::from(debuff.rounds);
                let base = match debuff.effect {
                    DebuffEffect::DamageOverTime { damage_pct } => odds * damage_pct * rounds,
                    DebuffEffect::Modifier { pct } => odds * (pct * 0.3) * rounds,
                    DebuffEffect::ElementAttach { .. } => 0.0,
                };
                base + 10.0
            }
            AbilityEffect::Attack { .. } => {
                let finishing = if target.health_fraction() < w.low_health_threshold {
                    0.5
                } else {
                    0.0
                };
                let mut s = ability.power * (1.0 + finishing);
                if ability.power * (target.health / 200.0) >= target.health {
                    s += 20.0;
                }
                s
            }
        };

        if ability.shape == TargetShape::All {
            score *= if pool_size > 1 { 1.2 } else { 0.1 };
        }

        if ability.is_attack() {
            if target.elements.iter().any(|e| e.is_weak_to(ability.element)) {
                score *= 2.0;
            }
            if target.elements.iter().any(|e| e.resists(ability.element)) {
                score *= 0.5;
            }
        }

        score *= self.mana_factor(actor, ability);

        if let AbilityEffect::Debuff(debuff) = &ability.effect {
            for existing in target.debuffs.iter().filter(|d| d.tag == debuff.tag) {
                let remaining = existing.total_rounds.saturating_sub(existing.rounds_applied);
                score -= match debuff.effect {
                    DebuffEffect::ElementAttach { .. } => 50.0,
                    _ => 10.0 * f64::from(remaining),
                };
            }
        }

        score + rng.gen_f64() * w.jitter
    }

    /// Scales scores by mana pressure. Costly abilities lose appeal as mana
    /// runs low; regenerating ones gain it.
    fn mana_factor(&self, actor: &Character, ability: &Ability) -> f64 {
        if actor.max_mana <= 0.0 || ability.mana_cost == 0.0 {
            return 1.0;
        }
        let ratio = actor.mana_fraction();
        let scarcity = 1.0 - ratio;
        let cost_fraction = ability.mana_cost / actor.max_mana;

        if ability.mana_cost > 0.0 {
            (1.0 - cost_fraction * scarcity).max(0.0)
        } else {
            let mut pull = scarcity + self.weights.mana_crit_chance;
            if ratio >= 1.0 {
                pull += self.weights.full_mana_bonus;
            }
            1.0 + (-cost_fraction) * pull
        }
    }
}

impl DecisionPolicy for UtilityPolicy {
    fn decide(
        &self,
        actor: &Character,
        allies: &[&Character],
        enemies: &[&Character],
        rng: &mut BattleRng,
    ) -> Option<Decision> {
        let usable: SmallVec<[&Arc<Ability>; 8]> = actor.affordable_abilities().collect();
        if usable.is_empty() {
            return None;
        }

        if actor.health < self.weights.low_health_threshold * actor.max_health {
            if let Some(heal) = usable.iter().find(|a| a.is_heal()) {
                return Some(Decision::single(Arc::clone(heal), Target::Actor));
            }
        }

        let mut candidates: SmallVec<[Candidate<'_, '_>; 16]> = SmallVec::new();
        for &ability in &usable {
            let pool = Pool::for_alignment(actor.side, ability.alignment, allies, enemies);
            let pairs: SmallVec<[(Target, &Character); 8]> = match ability.shape {
                TargetShape::SelfOnly => smallvec![(Target::Actor, actor)],
                TargetShape::Single | TargetShape::All => pool.iter().collect(),
            };

            for (target, character) in pairs {
                if !character.is_alive() {
                    continue;
                }
                if ability.is_heal() && character.health >= character.max_health {
                    continue;
                }
                let score = self.score(actor, ability, character, pool.len(), rng);
                candidates.push(Candidate {
                    ability,
                    target,
                    pool,
                    score,
                });
            }
        }

        if candidates.is_empty() {
            return None;
        }

        let scores: SmallVec<[f64; 16]> = candidates.iter().map(|c| c.score).collect();
        let chosen = rng.choose_weighted(&scores).unwrap_or_else(|| best_index(&scores));
        let pick = &candidates[chosen];

        let targets: SmallVec<[Target; 4]> = match pick.ability.shape {
            TargetShape::SelfOnly => smallvec![Target::Actor],
            TargetShape::Single => smallvec![pick.target],
            TargetShape::All => pick.pool.all_targets(),
        };
        Some(Decision::new(Arc::clone(pick.ability), targets))
    }
}

/// Index of the highest score; the first one wins ties.
fn best_index(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}
