//! Numeric helpers shared by the resolver, ticker, and policies.
//!
//! All results are clamped into valid ranges; nothing here can fail.

use crate::core::{BattleConfig, StatusTag};

use super::character::Character;

/// Miss probability for attacks against `target`.
///
/// Base evasion plus every active evasion buff (as a percentage), clamped
/// to `[0, config.evasion_cap]`.
#[must_use]
pub fn effective_evasion(target: &Character, config: &BattleConfig) -> f64 {
    let ev = target.evasion + target.buff_total(StatusTag::Evasion) / 100.0;
    ev.clamp(0.0, config.evasion_cap)
}

/// Damage multiplier from a character's buffs and debuffs on one stat.
///
/// The net percentage (buffs minus debuffs) is clamped to
/// `±config.modifier_clamp`. For [`StatusTag::Defense`] the sign is inverted,
/// so a defense buff lowers the damage taken.
#[must_use]
pub fn stat_modifier(character: &Character, tag: StatusTag, config: &BattleConfig) -> f64 {
    let clamp = config.modifier_clamp;
    let mut diff = (character.buff_total(tag) - character.debuff_total(tag)).clamp(-clamp, clamp);
    if tag == StatusTag::Defense {
        diff = -diff;
    }
    percent_to_multiplier(diff)
}

/// Convert a signed percentage into a symmetric multiplier.
///
/// `+x%` gives `1 + x/100`, `-x%` gives `1 / (1 + x/100)`.
#[must_use]
pub fn percent_to_multiplier(diff: f64) -> f64 {
    if diff > 0.0 {
        1.0 + diff / 100.0
    } else if diff < 0.0 {
        1.0 / (1.0 + diff.abs() / 100.0)
    } else {
        1.0
    }
}

/// Unrounded damage before modifiers.
///
/// `power * (strength + 5) / (defense + 13)^0.9 * ((level * 2 / 4 + 5) / 30)`,
/// where the level term uses integer division.
#[must_use]
pub fn base_damage(
    power: f64,
    source_strength: f64,
    source_level: u32,
    target_defense: f64,
) -> f64 {
    let level_term = f64::from(source_level * 2 / 4 + 5) / 30.0;
    power * (source_strength + 5.0) / (target_defense + 13.0).powf(0.9) * level_term
}

/// Unrounded heal magnitude before decay.
///
/// `power * spirit / (17 + 14 * ln(level))`.
#[must_use]
pub fn base_heal(power: f64, source_spirit: f64, source_level: u32) -> f64 {
    power * (source_spirit / (17.0 + 14.0 * f64::from(source_level).ln()))
}

/// Spirit-scaled percentage for a new buff or debuff instance.
///
/// `pct + pct/2 * spirit/200`; zero stays zero.
#[must_use]
pub fn spirit_scaled(pct: f64, spirit: f64) -> f64 {
    if pct == 0.0 {
        return 0.0;
    }
    pct + (pct / 2.0) * (spirit / 200.0)
}
