//! Uniform random policy.

use std::sync::Arc;

use smallvec::{smallvec, SmallVec};

use crate::abilities::{Ability, TargetAlignment, TargetShape};
use crate::battle::Character;
use crate::core::{BattleRng, Side};

use super::{Decision, DecisionPolicy, Pool, Target};

/// Picks an affordable ability uniformly at random, then a random target
/// from the pool its alignment implies.
///
/// `Any`-aligned abilities draw from both sides, allies first.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl DecisionPolicy for UniformPolicy {
    fn decide(
        &self,
        actor: &Character,
        allies: &[&Character],
        enemies: &[&Character],
        rng: &mut BattleRng,
    ) -> Option<Decision> {
        let usable: SmallVec<[&Arc<Ability>; 8]> = actor.affordable_abilities().collect();
        let ability = (*rng.choose(&usable)?).clone();

        let candidates: SmallVec<[Target; 8]> = match ability.alignment {
            TargetAlignment::Any => {
                let own = Pool::of(Side::Ally, allies, enemies);
                let other = Pool::of(Side::Enemy, allies, enemies);
                own.iter().chain(other.iter()).map(|(target, _)| target).collect()
            }
            alignment => Pool::for_alignment(actor.side, alignment, allies, enemies)
                .iter()
                .map(|(target, _)| target)
                .collect(),
        };

        let targets: SmallVec<[Target; 4]> = match ability.shape {
            TargetShape::SelfOnly => smallvec![Target::Actor],
            TargetShape::Single => smallvec![*rng.choose(&candidates)?],
            TargetShape::All => candidates.into_iter().collect(),
        };

        Some(Decision::new(ability, targets))
    }
}
