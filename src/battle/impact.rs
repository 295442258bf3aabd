//! Per-step impact records consumed by statistics.

use serde::{Deserialize, Serialize};

use crate::core::CharacterId;

/// One health change caused during a step.
///
/// `delta` is positive for damage and negative for healing. Evaded and
/// shielded casts still produce a record with a zero delta.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactRecord {
    pub actor: CharacterId,
    pub target: CharacterId,
    pub delta: f64,
    /// Came from a round-tick DoT rather than a direct cast.
    pub from_tick: bool,
}

impl ImpactRecord {
    /// Record for a direct cast.
    #[must_use]
    pub fn cast(actor: CharacterId, target: CharacterId, delta: f64) -> Self {
        Self {
            actor,
            target,
            delta,
            from_tick: false,
        }
    }

    /// Record for damage dealt by a round tick.
    #[must_use]
    pub fn tick(applied_by: CharacterId, target: CharacterId, damage: f64) -> Self {
        Self {
            actor: applied_by,
            target,
            delta: damage,
            from_tick: true,
        }
    }

    #[must_use]
    pub fn is_damage(&self) -> bool {
        self.delta > 0.0
    }

    #[must_use]
    pub fn is_healing(&self) -> bool {
        self.delta < 0.0
    }
}
