//! Resolver and policy behaviour over many random draws.

use std::sync::Arc;

use proptest::prelude::*;

use rust_skirmish::abilities::{Ability, DebuffTemplate};
use rust_skirmish::battle::{age_all, Caster, Character, DebuffInstance, EffectResolver, Outcome};
use rust_skirmish::core::{BattleConfig, BattleRng, CharacterId, Element, Side, StatusTag};
use rust_skirmish::policy::{DecisionPolicy, Target, UtilityPolicy};

const TRIALS: usize = 10_000;

/// How many of `TRIALS` casts left a debuff on an unshielded, unevasive target.
fn attach_count(chance_pct: f64, seed: u64) -> usize {
    let config = BattleConfig::default();
    let resolver = EffectResolver::new(&config);
    let hex = Ability::debuff(
        "hex",
        0.0,
        Element::Dark,
        DebuffTemplate::modifier(StatusTag::Strength, Element::Dark, 20.0, 3, chance_pct),
    );
    let source = Character::new(CharacterId::new(0), "witch", Side::Ally).with_level(10);
    let caster = Caster::of(&source, &config);
    let mut target = Character::new(CharacterId::new(1), "mark", Side::Enemy).with_health(1000.0);
    let mut rng = BattleRng::new(seed);

    let mut attached = 0;
    for _ in 0..TRIALS {
        target.debuffs.clear();
        let outcome = resolver.resolve(&caster, &mut target, &hex, 0, &mut rng);
        assert!(matches!(outcome, Outcome::Damaged(_)));
        attached += target.debuffs.len();
    }
    attached
}

#[test]
fn test_certain_debuff_always_attaches() {
    assert_eq!(attach_count(100.0, 1), TRIALS);
}

#[test]
fn test_zero_chance_debuff_never_attaches() {
    assert_eq!(attach_count(0.0, 2), 0);
}

#[test]
fn test_even_chance_debuff_attaches_half_the_time() {
    let rate = attach_count(50.0, 3) as f64 / TRIALS as f64;
    assert!((rate - 0.5).abs() < 0.03, "rate {rate}");
}

#[test]
fn test_element_attach_outlives_its_instance() {
    let config = BattleConfig::default();
    let resolver = EffectResolver::new(&config);
    let soak = DebuffTemplate::element_attach(Element::Water, 1, 100.0);
    let source = Character::new(CharacterId::new(0), "pondril", Side::Ally);
    let caster = Caster::of(&source, &config);
    let mut target =
        Character::new(CharacterId::new(1), "cinder", Side::Enemy).with_elements(&[Element::Fire]);
    let mut rng = BattleRng::new(4);

    assert!(resolver.try_attach_debuff(&caster, &mut target, &soak, &mut rng));
    assert!(target.has_element(Element::Water));

    age_all(&mut target.debuffs);
    assert!(target.debuffs.is_empty());
    assert!(target.has_element(Element::Water));

    // Already carries water and has no instance to refresh.
    assert!(!resolver.try_attach_debuff(&caster, &mut target, &soak, &mut rng));
}

// =============================================================================
// Utility Policy
// =============================================================================

fn stale_hex() -> DebuffInstance {
    DebuffInstance {
        applied_by: CharacterId::new(0),
        tag: StatusTag::Defense,
        modifier_pct: 20.0,
        damage_pct: 0.0,
        element: Element::Earth,
        element_to_apply: None,
        total_rounds: 10,
        rounds_applied: 0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// A re-applied debuff scores far below zero, leaving the attack as the
    /// only positive option.
    #[test]
    fn prop_single_positive_pair_always_chosen(seed in any::<u64>(), power in 1.0f64..200.0) {
        let bash = Arc::new(Ability::attack("bash", power, Element::Wild));
        let sunder = Arc::new(Ability::debuff(
            "sunder",
            0.0,
            Element::Earth,
            DebuffTemplate::modifier(StatusTag::Defense, Element::Earth, 20.0, 4, 100.0),
        ));
        let actor = Character::new(CharacterId::new(0), "hero", Side::Ally)
            .with_ability(sunder)
            .with_ability(bash);
        let mut foe = Character::new(CharacterId::new(1), "foe", Side::Enemy);
        foe.debuffs.push(stale_hex());

        let policy = UtilityPolicy::default();
        let mut rng = BattleRng::new(seed);
        let decision = policy.decide(&actor, &[&actor], &[&foe], &mut rng).unwrap();

        prop_assert_eq!(decision.ability.key.as_str(), "bash");
        prop_assert_eq!(decision.targets.as_slice(), &[Target::Enemy(0)]);
    }
}
