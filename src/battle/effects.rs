//! Timed effect instances owned by an affected character.
//!
//! Each application produces its own instance; instances of the same tag are
//! never merged and age independently. Attribution is a plain
//! `CharacterId`, not a handle to the caster.

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, Element, StatusTag};

/// One application of a buff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuffInstance {
    pub applied_by: CharacterId,
    pub tag: StatusTag,
    /// Spirit-scaled percentage, fixed at creation.
    pub modifier_pct: f64,
    pub total_rounds: u32,
    pub rounds_applied: u32,
}

/// One application of a debuff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebuffInstance {
    pub applied_by: CharacterId,
    pub tag: StatusTag,
    /// Spirit-scaled penalty percentage, fixed at creation.
    pub modifier_pct: f64,
    /// Percent of max health lost per round; 0 for non-DoT debuffs.
    pub damage_pct: f64,
    /// Element of the effect, used for DoT effectiveness.
    pub element: Element,
    /// Affinity this instance attached to its target, if any.
    pub element_to_apply: Option<Element>,
    pub total_rounds: u32,
    pub rounds_applied: u32,
}

/// Shared aging behaviour for timed effects.
pub trait TimedEffect {
    fn total_rounds(&self) -> u32;
    fn rounds_applied(&self) -> u32;
    fn rounds_applied_mut(&mut self) -> &mut u32;

    /// Rounds left before expiry.
    fn remaining_rounds(&self) -> u32 {
        self.total_rounds().saturating_sub(self.rounds_applied())
    }

    /// Advance by one round. Returns true once the instance has expired.
    fn age(&mut self) -> bool {
        *self.rounds_applied_mut() += 1;
        self.rounds_applied() >= self.total_rounds()
    }
}

impl TimedEffect for BuffInstance {
    fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    fn rounds_applied(&self) -> u32 {
        self.rounds_applied
    }

    fn rounds_applied_mut(&mut self) -> &mut u32 {
        &mut self.rounds_applied
    }
}

impl TimedEffect for DebuffInstance {
    fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    fn rounds_applied(&self) -> u32 {
        self.rounds_applied
    }

    fn rounds_applied_mut(&mut self) -> &mut u32 {
        &mut self.rounds_applied
    }
}

/// Age every instance by one round and drop the ones that expired.
///
/// Returns the number of instances removed.
pub fn age_all<T: TimedEffect>(effects: &mut Vec<T>) -> usize {
    let before = effects.len();
    effects.retain_mut(|effect| !effect.age());
    before - effects.len()
}
