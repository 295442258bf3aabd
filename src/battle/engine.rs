//! The combat engine: turn scheduling, step logic, and termination.
//!
//! ## Lifecycle
//!
//! An `Engine` is built once per battle from two already-built teams and is
//! stepped until [`Engine::game_over`] reports true. Each call to
//! [`Engine::step`] gives one combatant one turn; a full pass through the
//! turn order is a round, after which the [`RoundTicker`] runs.
//!
//! ```
//! use std::sync::Arc;
//! use rust_skirmish::abilities::Ability;
//! use rust_skirmish::battle::{Character, Engine};
//! use rust_skirmish::core::{BattleRng, CharacterId, Element, Side};
//! use rust_skirmish::policy::UniformPolicy;
//!
//! let bash = Arc::new(Ability::attack("bash", 40.0, Element::Wild));
//! let hero = Character::new(CharacterId::new(0), "hero", Side::Ally).with_ability(bash.clone());
//! let slime = Character::new(CharacterId::new(0), "slime", Side::Enemy).with_ability(bash);
//!
//! let mut engine = Engine::new(vec![hero], vec![slime], BattleRng::new(7));
//! while !engine.game_over() {
//!     engine.step(&UniformPolicy);
//! }
//! assert!(engine.total_rounds() <= 100);
//! ```

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::abilities::Ability;
use crate::core::{BattleConfig, BattleRng, CharacterId, Side};
use crate::policy::{DecisionPolicy, Target};

use super::character::Character;
use super::impact::ImpactRecord;
use super::resolver::{Caster, EffectResolver};
use super::ticker::RoundTicker;

/// Whether the battle is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    Running,
    Over { player_won: bool },
}

/// Battle-scoped state machine.
#[derive(Clone, Debug)]
pub struct Engine {
    characters: Vec<Character>,
    /// Permutation of slots into `characters`, fixed at construction.
    turn_order: Vec<usize>,
    cursor: usize,
    total_rounds: u32,
    total_turns: u32,
    status: BattleStatus,
    last_impacts: Vec<ImpactRecord>,
    ticker: RoundTicker,
    rng: BattleRng,
    config: BattleConfig,
}

impl Engine {
    /// Create a battle with default settings.
    #[must_use]
    pub fn new(allies: Vec<Character>, enemies: Vec<Character>, rng: BattleRng) -> Self {
        Self::with_config(allies, enemies, rng, BattleConfig::default())
    }

    /// Create a battle.
    ///
    /// Allies come first, then enemies, each in the given order. Every
    /// character is assigned the side of the list it came in and renumbered
    /// so its `CharacterId` equals its slot.
    #[must_use]
    pub fn with_config(
        allies: Vec<Character>,
        enemies: Vec<Character>,
        mut rng: BattleRng,
        config: BattleConfig,
    ) -> Self {
        let mut characters = Vec::with_capacity(allies.len() + enemies.len());
        let sided = allies
            .into_iter()
            .map(|c| (c, Side::Ally))
            .chain(enemies.into_iter().map(|c| (c, Side::Enemy)));
        for (slot, (mut character, side)) in sided.enumerate() {
            character.side = side;
            character.id = CharacterId::new(slot as u32);
            characters.push(character);
        }

        let turn_order = Self::schedule(&characters, &mut rng);

        Self {
            characters,
            turn_order,
            cursor: 0,
            total_rounds: 0,
            total_turns: 0,
            status: BattleStatus::Running,
            last_impacts: Vec::new(),
            ticker: RoundTicker::new(),
            rng,
            config,
        }
    }

    /// Sort slots by descending speed. Each character draws one tiebreak
    /// value up front so equal speeds order consistently under a seed.
    fn schedule(characters: &[Character], rng: &mut BattleRng) -> Vec<usize> {
        let tiebreaks: Vec<u64> = characters.iter().map(|_| rng.gen_u64()).collect();
        let mut order: Vec<usize> = (0..characters.len()).collect();
        order.sort_by(|&a, &b| {
            characters[b]
                .speed
                .total_cmp(&characters[a].speed)
                .then(tiebreaks[a].cmp(&tiebreaks[b]))
        });
        order
    }

    /// Give the current combatant its turn.
    pub fn step(&mut self, policy: &dyn DecisionPolicy) {
        self.last_impacts.clear();
        self.total_turns += 1;

        if self.check_end() {
            return;
        }

        let actor_slot = self.turn_order[self.cursor];
        if !self.characters[actor_slot].is_alive() {
            self.advance();
            return;
        }

        let Some((ability, target_slots)) = self.decide(actor_slot, policy) else {
            let actor = &self.characters[actor_slot];
            debug!(actor = %actor.id, name = %actor.name, "no valid action, turn skipped");
            self.advance();
            return;
        };

        self.characters[actor_slot].spend_mana(ability.mana_cost);

        let resolver = EffectResolver::new(&self.config);
        let round = self.total_rounds;
        for slot in target_slots {
            let caster = Caster::of(&self.characters[actor_slot], &self.config);
            let target = &mut self.characters[slot];
            let outcome = resolver.resolve(&caster, target, &ability, round, &mut self.rng);
            trace!(
                actor = %caster.id,
                target = %target.id,
                ability = %ability.key,
                ?outcome,
                health = target.health,
                "impact"
            );
            self.last_impacts.push(ImpactRecord::cast(caster.id, target.id, outcome.delta()));
        }

        if !self.check_end() {
            self.advance();
        }
    }

    /// Step until the battle ends. Returns whether the ally side won.
    pub fn run(&mut self, policy: &dyn DecisionPolicy) -> bool {
        while !self.game_over() {
            self.step(policy);
        }
        self.player_won()
    }

    /// Ask the policy for a decision and map its targets back to slots.
    ///
    /// Returns `None` for a skipped turn. Targets that don't name a living
    /// combatant are dropped.
    fn decide(
        &mut self,
        actor_slot: usize,
        policy: &dyn DecisionPolicy,
    ) -> Option<(Arc<Ability>, SmallVec<[usize; 4]>)> {
        let mut ally_slots: SmallVec<[usize; 8]> = SmallVec::new();
        let mut enemy_slots: SmallVec<[usize; 8]> = SmallVec::new();
        for (slot, character) in self.characters.iter().enumerate().filter(|(_, c)| c.is_alive()) {
            match character.side {
                Side::Ally => ally_slots.push(slot),
                Side::Enemy => enemy_slots.push(slot),
            }
        }

        let allies: SmallVec<[&Character; 8]> =
            ally_slots.iter().map(|&s| &self.characters[s]).collect();
        let enemies: SmallVec<[&Character; 8]> =
            enemy_slots.iter().map(|&s| &self.characters[s]).collect();

        let actor = &self.characters[actor_slot];
        let decision = policy.decide(actor, &allies, &enemies, &mut self.rng)?;

        let slots: SmallVec<[usize; 4]> = decision
            .targets
            .iter()
            .filter_map(|target| match *target {
                Target::Actor => Some(actor_slot),
                Target::Ally(i) => ally_slots.get(i).copied(),
                Target::Enemy(i) => enemy_slots.get(i).copied(),
            })
            .collect();

        if slots.is_empty() {
            return None;
        }
        Some((decision.ability, slots))
    }

    /// Evaluate termination, latching the result once reached.
    ///
    /// The ally side wins iff it has a living member, so a wipe of both
    /// sides on the same tick is a loss.
    fn check_end(&mut self) -> bool {
        if let BattleStatus::Over { .. } = self.status {
            return true;
        }

        let allies_alive = self.side_alive(Side::Ally);
        let enemies_alive = self.side_alive(Side::Enemy);
        if allies_alive && enemies_alive && self.total_rounds < self.config.round_cap {
            return false;
        }

        self.status = BattleStatus::Over {
            player_won: allies_alive,
        };
        debug!(
            player_won = allies_alive,
            rounds = self.total_rounds,
            turns = self.total_turns,
            "battle over"
        );
        true
    }

    /// Move the cursor; a wrap completes a round.
    fn advance(&mut self) {
        let prev = self.cursor;
        self.cursor = (self.cursor + 1) % self.turn_order.len();
        if self.cursor < prev {
            self.ticker.tick(&mut self.characters, &mut self.last_impacts);
            self.total_rounds += 1;
        }
    }

    fn side_alive(&self, side: Side) -> bool {
        self.characters.iter().any(|c| c.side == side && c.is_alive())
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        matches!(self.status, BattleStatus::Over { .. })
    }

    /// True iff the ally side had a living member when the battle ended.
    /// Always false while the battle is running.
    #[must_use]
    pub fn player_won(&self) -> bool {
        matches!(self.status, BattleStatus::Over { player_won: true })
    }

    #[must_use]
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    #[must_use]
    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    /// Impacts from the most recent step, including any round tick.
    #[must_use]
    pub fn last_impacts(&self) -> &[ImpactRecord] {
        &self.last_impacts
    }

    /// All combatants, allies first. Slot equals `CharacterId`.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.raw() as usize)
    }

    #[must_use]
    pub fn turn_order(&self) -> &[usize] {
        &self.turn_order
    }

    /// The combatant whose turn is next.
    #[must_use]
    pub fn current_actor(&self) -> Option<&Character> {
        self.turn_order.get(self.cursor).map(|&slot| &self.characters[slot])
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::effects::DebuffInstance;
    use crate::core::{Element, StatusTag};
    use crate::policy::Decision;

    /// Hits the first living opponent with the first ability.
    fn first_enemy(
        actor: &Character,
        allies: &[&Character],
        enemies: &[&Character],
        _rng: &mut BattleRng,
    ) -> Option<Decision> {
        let ability = actor.abilities.first()?.clone();
        let target = match actor.side {
            Side::Ally if !enemies.is_empty() => Target::Enemy(0),
            Side::Enemy if !allies.is_empty() => Target::Ally(0),
            _ => return None,
        };
        Some(Decision::single(ability, target))
    }

    fn pass(
        _: &Character,
        _: &[&Character],
        _: &[&Character],
        _: &mut BattleRng,
    ) -> Option<Decision> {
        None
    }

    fn fighter(name: &str, speed: f64, power: f64) -> Character {
        Character::new(CharacterId::new(0), name, Side::Ally)
            .with_health(100.0)
            .with_stats(10.0, 5.0, 5.0, speed)
            .with_ability(Arc::new(Ability::attack("hit", power, Element::Wild)))
    }

    #[test]
    fn test_construction_assigns_slots_and_sides() {
        let engine = Engine::new(
            vec![fighter("a", 1.0, 10.0), fighter("b", 1.0, 10.0)],
            vec![fighter("c", 1.0, 10.0)],
            BattleRng::new(1),
        );
        let chars = engine.characters();
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[2].side, Side::Enemy);
        assert_eq!(&*chars[2].name, "c");
        assert!(chars.iter().enumerate().all(|(i, c)| c.id.raw() as usize == i));
    }

    #[test]
    fn test_turn_order_by_speed() {
        let engine = Engine::new(
            vec![fighter("slow", 2.0, 10.0), fighter("fast", 9.0, 10.0)],
            vec![fighter("mid", 5.0, 10.0)],
            BattleRng::new(1),
        );
        assert_eq!(engine.turn_order(), &[1, 2, 0]);
    }

    #[test]
    fn test_speed_ties_reproducible() {
        let build = || {
            Engine::new(
                (0..4).map(|i| fighter(&format!("a{i}"), 5.0, 10.0)).collect(),
                (0..4).map(|i| fighter(&format!("e{i}"), 5.0, 10.0)).collect(),
                BattleRng::new(99),
            )
        };
        assert_eq!(build().turn_order(), build().turn_order());
    }

    #[test]
    fn test_empty_side_ends_immediately() {
        let mut engine = Engine::new(vec![fighter("a", 1.0, 10.0)], vec![], BattleRng::new(1));
        engine.step(&pass);
        assert!(engine.game_over());
        assert!(engine.player_won());
        assert_eq!(engine.total_turns(), 1);
        assert_eq!(engine.total_rounds(), 0);
    }

    #[test]
    fn test_skipped_turns_complete_rounds() {
        let mut engine = Engine::new(
            vec![fighter("a", 2.0, 10.0)],
            vec![fighter("b", 1.0, 10.0)],
            BattleRng::new(1),
        );
        for _ in 0..4 {
            engine.step(&pass);
            assert!(engine.last_impacts().is_empty());
        }
        assert_eq!(engine.total_rounds(), 2);
        assert_eq!(engine.total_turns(), 4);
        assert!(!engine.game_over());
    }

    #[test]
    fn test_round_cap_forces_end() {
        let config = BattleConfig::default().with_round_cap(3);
        let mut engine = Engine::with_config(
            vec![fighter("a", 2.0, 10.0)],
            vec![fighter("b", 1.0, 10.0)],
            BattleRng::new(1),
            config,
        );
        let mut steps = 0;
        while !engine.game_over() {
            engine.step(&pass);
            steps += 1;
        }
        assert_eq!(engine.total_rounds(), 3);
        // 6 acting turns plus the step that detects the cap
        assert_eq!(steps, 7);
        assert!(engine.player_won());
    }

    #[test]
    fn test_cast_records_impacts_and_kills() {
        let mut engine = Engine::new(
            vec![fighter("hero", 9.0, 1000.0)],
            vec![fighter("slime", 1.0, 10.0).with_health(30.0)],
            BattleRng::new(3),
        );
        engine.step(&first_enemy);
        let impacts = engine.last_impacts();
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts[0].actor, CharacterId::new(0));
        assert_eq!(impacts[0].target, CharacterId::new(1));
        assert!(!impacts[0].from_tick);
        assert!(engine.game_over());
        assert!(engine.player_won());
        assert_eq!(engine.characters()[1].health, 0.0);
    }

    #[test]
    fn test_dead_actor_is_passed_over() {
        let mut engine = Engine::new(
            vec![fighter("a", 9.0, 10.0), fighter("b", 5.0, 10.0)],
            vec![fighter("c", 1.0, 10.0)],
            BattleRng::new(1),
        );
        engine.characters[0].health = 0.0;
        engine.step(&first_enemy);
        assert!(engine.last_impacts().is_empty());
        assert_eq!(engine.current_actor().map(|c| &*c.name), Some("b"));
    }

    #[test]
    fn test_round_tick_reports_dot() {
        let mut engine = Engine::new(
            vec![fighter("a", 2.0, 10.0)],
            vec![fighter("b", 1.0, 10.0)],
            BattleRng::new(1),
        );
        engine.characters[1].debuffs.push(DebuffInstance {
            applied_by: CharacterId::new(0),
            tag: StatusTag::Burn,
            modifier_pct: 0.0,
            damage_pct: 10.0,
            element: Element::Fire,
            element_to_apply: None,
            total_rounds: 2,
            rounds_applied: 0,
        });

        engine.step(&pass);
        assert!(engine.last_impacts().is_empty());
        engine.step(&pass);
        let impacts = engine.last_impacts();
        assert_eq!(impacts.len(), 1);
        assert!(impacts[0].from_tick);
        assert_eq!(impacts[0].delta, 10.0);
        assert_eq!(engine.characters()[1].health, 90.0);
        assert_eq!(engine.total_rounds(), 1);
    }

    #[test]
    fn test_mana_spent_and_clamped() {
        let regen = Arc::new(Ability::attack("tap", 1.0, Element::Wild).with_cost(-3.0));
        let mut hero = fighter("hero", 9.0, 10.0).with_mana(2.0, 4.0);
        hero.abilities = smallvec::smallvec![regen];
        let mut engine = Engine::new(vec![hero], vec![fighter("c", 1.0, 10.0)], BattleRng::new(1));
        engine.step(&first_enemy);
        assert_eq!(engine.characters()[0].mana, 4.0);
    }
}
