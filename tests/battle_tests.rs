//! Engine integration tests: worked examples, termination, impact records.

use std::sync::Arc;

use rust_skirmish::abilities::{Ability, DebuffTemplate, TargetShape};
use rust_skirmish::battle::{BattleStatus, Character, DebuffInstance, Engine};
use rust_skirmish::core::{BattleConfig, BattleRng, CharacterId, Element, Side, StatusTag};
use rust_skirmish::policy::{Decision, Target, UniformPolicy, UtilityPolicy};

fn fighter(name: &str, side: Side) -> Character {
    Character::new(CharacterId::new(0), name, side)
}

/// Casts the actor's first ability on the first living enemy of the
/// opposing side.
fn first_ability_first_foe(
    actor: &Character,
    _allies: &[&Character],
    _enemies: &[&Character],
    _rng: &mut BattleRng,
) -> Option<Decision> {
    let ability = actor.abilities.first()?;
    let target = match actor.side {
        Side::Ally => Target::Enemy(0),
        Side::Enemy => Target::Ally(0),
    };
    Some(Decision::single(Arc::clone(ability), target))
}

fn self_cast(
    actor: &Character,
    _: &[&Character],
    _: &[&Character],
    _: &mut BattleRng,
) -> Option<Decision> {
    Some(Decision::single(Arc::clone(actor.abilities.first()?), Target::Actor))
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_damage_example_through_engine() {
    let strike = Arc::new(Ability::attack("strike", 40.0, Element::Wild));
    let hero = fighter("hero", Side::Ally)
        .with_level(10)
        .with_stats(15.0, 5.0, 5.0, 50.0)
        .with_ability(strike);
    let dummy = fighter("dummy", Side::Enemy)
        .with_level(10)
        .with_health(500.0)
        .with_stats(5.0, 18.0, 5.0, 1.0);

    let mut engine = Engine::new(vec![hero], vec![dummy], BattleRng::new(1));
    engine.step(&first_ability_first_foe);

    let expected = (40.0 * 20.0 / 31f64.powf(0.9) * (10.0 / 30.0)).ceil();
    let impacts = engine.last_impacts();
    assert_eq!(impacts.len(), 1);
    assert_eq!(impacts[0].actor, CharacterId::new(0));
    assert_eq!(impacts[0].target, CharacterId::new(1));
    assert_eq!(impacts[0].delta, expected);
    assert!(!impacts[0].from_tick);
    assert_eq!(engine.characters()[1].health, 500.0 - expected);
}

#[test]
fn test_heal_example_through_engine() {
    let mend = Arc::new(Ability::heal("mend", 50.0, Element::Earth));
    let healer = fighter("healer", Side::Ally)
        .with_level(5)
        .with_stats(5.0, 5.0, 7.0, 50.0)
        .with_ability(mend);
    let dummy = fighter("dummy", Side::Enemy).with_stats(5.0, 5.0, 5.0, 1.0);

    let mut engine = Engine::new(vec![healer], vec![dummy], BattleRng::new(2));
    engine.step(&self_cast);

    let expected = (50.0 * 7.0 / (17.0 + 14.0 * 5f64.ln())).ceil();
    assert_eq!(expected, 9.0);
    assert_eq!(engine.last_impacts()[0].delta, -expected);
    assert_eq!(engine.characters()[0].health, 100.0);
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_wipe_ends_battle_with_winner() {
    let nuke = Arc::new(Ability::attack("nuke", 500.0, Element::Wild));
    let hero = fighter("hero", Side::Ally)
        .with_level(20)
        .with_stats(50.0, 5.0, 5.0, 50.0)
        .with_ability(nuke);
    let dummy = fighter("dummy", Side::Enemy).with_health(10.0).with_stats(5.0, 0.0, 5.0, 1.0);

    let mut engine = Engine::new(vec![hero], vec![dummy], BattleRng::new(3));
    engine.step(&first_ability_first_foe);

    assert!(engine.game_over());
    assert!(engine.player_won());
    assert_eq!(engine.status(), BattleStatus::Over { player_won: true });

    // Further steps are inert apart from the turn counter.
    let turns = engine.total_turns();
    engine.step(&first_ability_first_foe);
    assert!(engine.last_impacts().is_empty());
    assert_eq!(engine.total_turns(), turns + 1);
}

#[test]
fn test_enemy_win_is_reported() {
    let nuke = Arc::new(Ability::attack("nuke", 500.0, Element::Wild));
    let hero = fighter("hero", Side::Ally).with_health(10.0).with_stats(5.0, 0.0, 5.0, 1.0);
    let brute = fighter("brute", Side::Enemy)
        .with_level(20)
        .with_stats(50.0, 5.0, 5.0, 50.0)
        .with_ability(nuke);

    let mut engine = Engine::new(vec![hero], vec![brute], BattleRng::new(4));
    assert!(!engine.run(&first_ability_first_foe));
    assert_eq!(engine.status(), BattleStatus::Over { player_won: false });
}

#[test]
fn test_stalemate_hits_round_cap() {
    let idle_a = fighter("a", Side::Ally);
    let idle_b = fighter("b", Side::Enemy);
    let config = BattleConfig::default().with_round_cap(12);

    let mut engine = Engine::with_config(vec![idle_a], vec![idle_b], BattleRng::new(5), config);
    let won = engine.run(&UniformPolicy);

    assert!(won, "living allies at the cap count as a win");
    assert_eq!(engine.total_rounds(), 12);
}

#[test]
fn test_simultaneous_wipe_is_ally_loss() {
    let lethal = |applied_by: u32| DebuffInstance {
        applied_by: CharacterId::new(applied_by),
        tag: StatusTag::Poison,
        modifier_pct: 0.0,
        damage_pct: 100.0,
        element: Element::Wild,
        element_to_apply: None,
        total_rounds: 3,
        rounds_applied: 0,
    };
    let mut hero = fighter("hero", Side::Ally).with_health(50.0).with_stats(5.0, 5.0, 5.0, 9.0);
    let mut brute = fighter("brute", Side::Enemy).with_health(50.0).with_stats(5.0, 5.0, 5.0, 1.0);
    hero.debuffs.push(lethal(1));
    brute.debuffs.push(lethal(0));

    let mut engine = Engine::new(vec![hero], vec![brute], BattleRng::new(8));
    let won = engine.run(&UniformPolicy);

    // Both fall to the same round tick; no living ally means a loss.
    assert!(engine.characters().iter().all(|c| !c.is_alive()));
    assert_eq!(engine.total_rounds(), 1);
    assert!(!won);
    assert_eq!(engine.status(), BattleStatus::Over { player_won: false });
}

#[test]
fn test_builtin_policies_finish() {
    for seed in 0..20 {
        let bash = Arc::new(Ability::attack("bash", 30.0, Element::Wild).with_cost(-1.0));
        let quake = Arc::new(
            Ability::attack("quake", 70.0, Element::Earth)
                .with_shape(TargetShape::All)
                .with_cost(3.0),
        );
        let team = |side: Side| -> Vec<Character> {
            (0..3)
                .map(|i| {
                    fighter(&format!("{side:?}-{i}"), side)
                        .with_level(10)
                        .with_mana(2.0, 4.0)
                        .with_stats(20.0, 20.0, 20.0, 10.0 + f64::from(i))
                        .with_ability(bash.clone())
                        .with_ability(quake.clone())
                })
                .collect()
        };

        let mut uniform = Engine::new(team(Side::Ally), team(Side::Enemy), BattleRng::new(seed));
        uniform.run(&UniformPolicy);
        assert!(uniform.total_rounds() <= 100);

        let mut utility = Engine::new(team(Side::Ally), team(Side::Enemy), BattleRng::new(seed));
        utility.run(&UtilityPolicy::default());
        assert!(utility.total_rounds() <= 100);
    }
}

// =============================================================================
// Round Ticks
// =============================================================================

#[test]
fn test_dot_ticks_are_attributed_to_caster() {
    let venom = Arc::new(Ability::debuff(
        "venom",
        0.0,
        Element::Earth,
        DebuffTemplate::dot(StatusTag::Poison, Element::Earth, 10.0, 3, 100.0),
    ));
    let hero = fighter("hero", Side::Ally).with_stats(5.0, 5.0, 5.0, 9.0).with_ability(venom);
    let dummy = fighter("dummy", Side::Enemy).with_health(1000.0).with_stats(5.0, 500.0, 5.0, 1.0);

    let mut engine = Engine::new(vec![hero], vec![dummy], BattleRng::new(6));
    engine.step(&first_ability_first_foe); // hero casts
    assert!(engine.characters()[1].has_debuff(StatusTag::Poison));

    engine.step(&first_ability_first_foe); // dummy has nothing, round wraps
    let ticks: Vec<_> = engine.last_impacts().iter().filter(|i| i.from_tick).collect();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].actor, CharacterId::new(0));
    assert_eq!(ticks[0].target, CharacterId::new(1));
    assert_eq!(ticks[0].delta, 100.0);
    assert_eq!(engine.total_rounds(), 1);
}

#[test]
fn test_same_seed_same_battle() {
    let build = || {
        let bash = Arc::new(Ability::attack("bash", 35.0, Element::Fire));
        let allies = vec![
            fighter("x", Side::Ally).with_ability(bash.clone()),
            fighter("y", Side::Ally).with_ability(bash.clone()),
        ];
        let enemies = vec![
            fighter("z", Side::Enemy).with_ability(bash.clone()),
            fighter("w", Side::Enemy).with_ability(bash),
        ];
        Engine::new(allies, enemies, BattleRng::new(77))
    };

    let mut a = build();
    let mut b = build();
    while !a.game_over() {
        a.step(&UtilityPolicy::default());
        b.step(&UtilityPolicy::default());
        assert_eq!(a.last_impacts(), b.last_impacts());
    }
    assert_eq!(a.turn_order(), b.turn_order());
    assert_eq!(a.player_won(), b.player_won());
}
