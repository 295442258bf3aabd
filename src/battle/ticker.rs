//! End-of-round processing: damage over time, then effect aging.

use tracing::trace;

use crate::core::elemental_multiplier;

use super::character::Character;
use super::effects::age_all;
use super::impact::ImpactRecord;

/// Runs once per full pass through the turn order.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundTicker;

impl RoundTicker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Tick every living character, appending one record per DoT instance
    /// that dealt damage.
    ///
    /// Dead characters are skipped entirely; their effects stop aging.
    pub fn tick(&self, characters: &mut [Character], impacts: &mut Vec<ImpactRecord>) {
        for character in characters.iter_mut().filter(|c| c.is_alive()) {
            let total = Self::apply_dots(character, impacts);
            if total > 0.0 {
                character.take_damage(total);
                trace!(
                    target = %character.id,
                    damage = total,
                    health = character.health,
                    "dot tick"
                );
            }

            let expired = age_all(&mut character.buffs) + age_all(&mut character.debuffs);
            if expired > 0 {
                trace!(target = %character.id, expired, "effects expired");
            }
        }
    }

    /// Sum this round's DoT for one character and record each contribution.
    fn apply_dots(character: &Character, impacts: &mut Vec<ImpactRecord>) -> f64 {
        let mut total = 0.0;
        for debuff in character.debuffs.iter().filter(|d| d.damage_pct > 0.0) {
            let multiplier = elemental_multiplier(&character.elements, debuff.element);
            let damage = (character.max_health * (debuff.damage_pct / 100.0) * multiplier).ceil();
            total += damage;
            impacts.push(ImpactRecord::tick(debuff.applied_by, character.id, damage));
        }
        total
    }
}
