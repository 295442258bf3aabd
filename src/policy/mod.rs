//! Decision policies: choosing an ability and its targets for one turn.
//!
//! The engine hands a policy the acting character plus the living members of
//! each side, by absolute side (`allies` is always the player's side). A
//! policy answers with a [`Decision`] whose targets index into those pools,
//! or `None` to skip the turn.
//!
//! Any `Fn(&Character, &[&Character], &[&Character], &mut BattleRng) -> Option<Decision>`
//! is a policy too, which keeps ad-hoc policies in tests short.

mod uniform;
mod utility;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::abilities::{Ability, TargetAlignment};
use crate::battle::Character;
use crate::core::{BattleRng, Side};

pub use uniform::UniformPolicy;
pub use utility::{UtilityPolicy, UtilityWeights};

/// A target chosen by a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The acting character.
    Actor,
    /// Index into the living ally pool.
    Ally(usize),
    /// Index into the living enemy pool.
    Enemy(usize),
}

/// An ability and the targets it is cast on.
#[derive(Clone, Debug)]
pub struct Decision {
    pub ability: Arc<Ability>,
    pub targets: SmallVec<[Target; 4]>,
}

impl Decision {
    #[must_use]
    pub fn new(ability: Arc<Ability>, targets: SmallVec<[Target; 4]>) -> Self {
        Self { ability, targets }
    }

    /// Cast on exactly one target.
    #[must_use]
    pub fn single(ability: Arc<Ability>, target: Target) -> Self {
        Self {
            ability,
            targets: smallvec![target],
        }
    }
}

/// Chooses what a character does on its turn.
pub trait DecisionPolicy: Send + Sync {
    /// Pick an ability and targets for `actor`, or `None` to skip.
    ///
    /// `allies` and `enemies` hold only living characters.
    fn decide(
        &self,
        actor: &Character,
        allies: &[&Character],
        enemies: &[&Character],
        rng: &mut BattleRng,
    ) -> Option<Decision>;
}

impl<F> DecisionPolicy for F
where
    F: Fn(&Character, &[&Character], &[&Character], &mut BattleRng) -> Option<Decision>
        + Send
        + Sync,
{
    fn decide(
        &self,
        actor: &Character,
        allies: &[&Character],
        enemies: &[&Character],
        rng: &mut BattleRng,
    ) -> Option<Decision> {
        self(actor, allies, enemies, rng)
    }
}

/// Built-in policy selector, used by configs and the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Uniform,
    #[default]
    Utility,
}

impl PolicyKind {
    /// Instantiate the policy. `weights` only matter for the utility policy.
    #[must_use]
    pub fn build(self, weights: &UtilityWeights) -> Box<dyn DecisionPolicy> {
        match self {
            PolicyKind::Uniform => Box::new(UniformPolicy),
            PolicyKind::Utility => Box::new(UtilityPolicy::new(weights.clone())),
        }
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" | "random" => Ok(PolicyKind::Uniform),
            "utility" => Ok(PolicyKind::Utility),
            other => Err(format!("unknown policy {other:?} (expected uniform or utility)")),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Uniform => write!(f, "uniform"),
            PolicyKind::Utility => write!(f, "utility"),
        }
    }
}

/// One side's living members, with the [`Target`] constructor for that side.
#[derive(Clone, Copy, Debug)]
pub struct Pool<'a, 'c> {
    side: Side,
    members: &'a [&'c Character],
}

impl<'a, 'c> Pool<'a, 'c> {
    /// The pool for `side`.
    #[must_use]
    pub fn of(side: Side, allies: &'a [&'c Character], enemies: &'a [&'c Character]) -> Self {
        let members = match side {
            Side::Ally => allies,
            Side::Enemy => enemies,
        };
        Self { side, members }
    }

    /// The pool an ability aligned with `alignment` draws from when cast by
    /// a member of `actor_side`. `Any` resolves to the opposing side.
    #[must_use]
    pub fn for_alignment(
        actor_side: Side,
        alignment: TargetAlignment,
        allies: &'a [&'c Character],
        enemies: &'a [&'c Character],
    ) -> Self {
        match alignment {
            TargetAlignment::Ally => Self::of(actor_side, allies, enemies),
            TargetAlignment::Enemy | TargetAlignment::Any => {
                Self::of(actor_side.opponent(), allies, enemies)
            }
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Target naming the member at `index`.
    #[must_use]
    pub fn target(&self, index: usize) -> Target {
        match self.side {
            Side::Ally => Target::Ally(index),
            Side::Enemy => Target::Enemy(index),
        }
    }

    /// Every member as a target.
    #[must_use]
    pub fn all_targets(&self) -> SmallVec<[Target; 4]> {
        (0..self.len()).map(|i| self.target(i)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Target, &'c Character)> + '_ {
        self.members.iter().enumerate().map(|(i, c)| (self.target(i), *c))
    }
}
