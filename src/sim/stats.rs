//! Per-character statistics folded from battle impacts.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::battle::{Engine, ImpactRecord};
use crate::core::Side;
use crate::policy::DecisionPolicy;

/// Running totals for one template across many battles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub battles: u64,
    pub wins: u64,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    pub healing_done: f64,
    /// Damage dealt through round-tick DoTs. Also counted in `damage_dealt`.
    pub dot_dealt: f64,
}

impl CharacterStats {
    pub fn merge(&mut self, other: &CharacterStats) {
        self.battles += other.battles;
        self.wins += other.wins;
        self.damage_dealt += other.damage_dealt;
        self.damage_taken += other.damage_taken;
        self.healing_done += other.healing_done;
        self.dot_dealt += other.dot_dealt;
    }

    /// Win percentage, `None` before any battle.
    #[must_use]
    pub fn win_pct(&self) -> Option<f64> {
        (self.battles > 0).then(|| 100.0 * self.wins as f64 / self.battles as f64)
    }

    /// `total` averaged over battles fought, `None` before any battle.
    #[must_use]
    pub fn per_battle(&self, total: f64) -> Option<f64> {
        (self.battles > 0).then(|| total / self.battles as f64)
    }
}

/// Statistics for a set of battles, keyed by template key.
///
/// Tallies from separate workers combine with [`BatchTally::merge`]; the
/// result doesn't depend on merge order beyond float rounding.
#[derive(Clone, Debug, Default)]
pub struct BatchTally {
    per_character: FxHashMap<Arc<str>, CharacterStats>,
    battles: u64,
    total_rounds: u64,
    total_turns: u64,
}

impl BatchTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Step `engine` to the end with `policy`, recording every impact and
    /// the outcome.
    pub fn play(&mut self, engine: &mut Engine, policy: &dyn DecisionPolicy) {
        while !engine.game_over() {
            engine.step(policy);
            self.record_impacts(engine);
        }
        self.record_outcome(engine);
    }

    /// Fold the impacts of the engine's last step.
    pub fn record_impacts(&mut self, engine: &Engine) {
        for impact in engine.last_impacts() {
            self.record_impact(engine, impact);
        }
    }

    fn record_impact(&mut self, engine: &Engine, impact: &ImpactRecord) {
        let (Some(actor), Some(target)) =
            (engine.character(impact.actor), engine.character(impact.target))
        else {
            return;
        };

        if impact.is_damage() {
            let dealt = self.entry(&actor.name);
            dealt.damage_dealt += impact.delta;
            if impact.from_tick {
                dealt.dot_dealt += impact.delta;
            }
            self.entry(&target.name).damage_taken += impact.delta;
        } else if impact.is_healing() {
            self.entry(&actor.name).healing_done -= impact.delta;
        }
    }

    /// Count a finished battle for every combatant.
    pub fn record_outcome(&mut self, engine: &Engine) {
        let winner = if engine.player_won() { Side::Ally } else { Side::Enemy };
        for character in engine.characters() {
            let stats = self.entry(&character.name);
            stats.battles += 1;
            if character.side == winner {
                stats.wins += 1;
            }
        }
        self.battles += 1;
        self.total_rounds += u64::from(engine.total_rounds());
        self.total_turns += u64::from(engine.total_turns());
    }

    fn entry(&mut self, name: &Arc<str>) -> &mut CharacterStats {
        self.per_character.entry(Arc::clone(name)).or_default()
    }

    /// Combine two tallies.
    #[must_use]
    pub fn merge(mut self, other: BatchTally) -> BatchTally {
        for (name, stats) in other.per_character {
            self.per_character.entry(name).or_default().merge(&stats);
        }
        self.battles += other.battles;
        self.total_rounds += other.total_rounds;
        self.total_turns += other.total_turns;
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CharacterStats> {
        self.per_character.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterStats)> {
        self.per_character.iter().map(|(name, stats)| (&**name, stats))
    }

    #[must_use]
    pub fn battles(&self) -> u64 {
        self.battles
    }

    #[must_use]
    pub fn total_rounds(&self) -> u64 {
        self.total_rounds
    }

    #[must_use]
    pub fn total_turns(&self) -> u64 {
        self.total_turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::Ability;
    use crate::battle::Character;
    use crate::core::{BattleRng, CharacterId, Element};
    use crate::policy::UniformPolicy;

    fn duel(seed: u64) -> Engine {
        let bash = Arc::new(Ability::attack("bash", 40.0, Element::Wild));
        let hero = Character::new(CharacterId::new(0), "hero", Side::Ally)
            .with_health(60.0)
            .with_stats(10.0, 5.0, 5.0, 9.0)
            .with_ability(bash.clone());
        let slime = Character::new(CharacterId::new(0), "slime", Side::Enemy)
            .with_health(40.0)
            .with_stats(6.0, 5.0, 5.0, 3.0)
            .with_ability(bash);
        Engine::new(vec![hero], vec![slime], BattleRng::new(seed))
    }

    #[test]
    fn test_play_records_outcome() {
        let mut engine = duel(3);
        let mut tally = BatchTally::new();
        tally.play(&mut engine, &UniformPolicy);

        assert_eq!(tally.battles(), 1);
        assert_eq!(tally.total_turns(), u64::from(engine.total_turns()));
        let hero = tally.get("hero").unwrap();
        let slime = tally.get("slime").unwrap();
        assert_eq!(hero.battles, 1);
        assert_eq!(slime.battles, 1);
        assert_eq!(hero.wins + slime.wins, 1);
        assert_eq!(hero.damage_dealt, slime.damage_taken);
        assert_eq!(slime.damage_dealt, hero.damage_taken);
        assert_eq!(hero.dot_dealt, 0.0);
    }

    #[test]
    fn test_merge_adds_totals() {
        let mut a = BatchTally::new();
        a.play(&mut duel(1), &UniformPolicy);
        let mut b = BatchTally::new();
        b.play(&mut duel(2), &UniformPolicy);

        let hero_a = *a.get("hero").unwrap();
        let hero_b = *b.get("hero").unwrap();
        let merged = a.merge(b);

        assert_eq!(merged.battles(), 2);
        let hero = merged.get("hero").unwrap();
        assert_eq!(hero.battles, 2);
        assert_eq!(hero.wins, hero_a.wins + hero_b.wins);
        assert_eq!(hero.damage_dealt, hero_a.damage_dealt + hero_b.damage_dealt);
    }

    #[test]
    fn test_averages() {
        let stats = CharacterStats {
            battles: 4,
            wins: 1,
            damage_dealt: 100.0,
            ..Default::default()
        };
        assert_eq!(stats.win_pct(), Some(25.0));
        assert_eq!(stats.per_battle(stats.damage_dealt), Some(25.0));
        assert_eq!(CharacterStats::default().win_pct(), None);
    }
}
