//! Battle configuration parameters.

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Numeric limits and schedules that govern a single battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Rounds after which the battle is forced to end.
    pub round_cap: u32,

    /// Upper bound on the miss probability from evasion.
    pub evasion_cap: f64,

    /// Bound on the net buff-minus-debuff percentage for one stat.
    pub modifier_clamp: f64,

    /// Round at which heal decay starts.
    pub heal_decay_start: u32,

    /// Round at which heal decay reaches its floor.
    pub heal_decay_end: u32,

    /// Heal multiplier from `heal_decay_end` onwards.
    pub heal_decay_floor: f64,

    /// Damage multiplier for abilities that hit a whole side.
    pub area_damage_factor: f64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            round_cap: 100,
            evasion_cap: 0.75,
            modifier_clamp: 50.0,
            heal_decay_start: 15,
            heal_decay_end: 50,
            heal_decay_floor: 0.15,
            area_damage_factor: 0.67,
        }
    }
}

impl BattleConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_round_cap(mut self, rounds: u32) -> Self {
        self.round_cap = rounds;
        self
    }

    /// Set the evasion cap.
    #[must_use]
    pub fn with_evasion_cap(mut self, cap: f64) -> Self {
        self.evasion_cap = cap;
        self
    }

    /// Set the heal decay schedule.
    #[must_use]
    pub fn with_heal_decay(mut self, start: u32, end: u32, floor: f64) -> Self {
        self.heal_decay_start = start;
        self.heal_decay_end = end;
        self.heal_decay_floor = floor;
        self
    }

    /// Reject values the clamps and the decay schedule can't work with.
    pub fn validate(&self) -> Result<(), SimError> {
        let invalid = |msg: String| Err(SimError::InvalidConfig(msg));
        if self.round_cap == 0 {
            return invalid("round cap must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.evasion_cap) {
            return invalid(format!("evasion cap {} is outside [0, 1]", self.evasion_cap));
        }
        if !(self.modifier_clamp >= 0.0 && self.modifier_clamp.is_finite()) {
            return invalid(format!(
                "modifier clamp {} must be finite and non-negative",
                self.modifier_clamp
            ));
        }
        if self.heal_decay_end < self.heal_decay_start {
            return invalid(format!(
                "heal decay ends at round {} before it starts at {}",
                self.heal_decay_end, self.heal_decay_start
            ));
        }
        if !(0.0..=1.0).contains(&self.heal_decay_floor) {
            return invalid(format!("heal decay floor {} is outside [0, 1]", self.heal_decay_floor));
        }
        if !(self.area_damage_factor >= 0.0 && self.area_damage_factor.is_finite()) {
            return invalid(format!(
                "area damage factor {} must be finite and non-negative",
                self.area_damage_factor
            ));
        }
        Ok(())
    }

    /// Heal multiplier for the given round.
    ///
    /// 1 before the decay window, the floor after it, linear in between.
    #[must_use]
    pub fn heal_multiplier(&self, round: u32) -> f64 {
        if round < self.heal_decay_start {
            return 1.0;
        }
        if round >= self.heal_decay_end {
            return self.heal_decay_floor;
        }
        let span = f64::from(self.heal_decay_end - self.heal_decay_start);
        let t = f64::from(round - self.heal_decay_start) / span;
        (1.0 - t) + self.heal_decay_floor * t
    }
}
