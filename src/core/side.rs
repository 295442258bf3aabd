//! Battle sides and effect tags.

use serde::{Deserialize, Serialize};

/// Which team a combatant fights for.
///
/// `Ally` is the player's side; a battle is reported as won when this side
/// still has a living member at termination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ally,
    Enemy,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Ally => Side::Enemy,
            Side::Enemy => Side::Ally,
        }
    }

    /// Is this the player's side?
    #[must_use]
    pub const fn is_ally(self) -> bool {
        matches!(self, Side::Ally)
    }
}

/// Label carried by every timed effect.
///
/// Two instances with the same tag are "the same stat" for modifier sums,
/// repeat-debuff scoring, and element-attach refreshes. They are never
/// merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTag {
    Strength,
    Defense,
    Spirit,
    Speed,
    Evasion,
    Poison,
    Burn,
    Element,
}

impl std::fmt::Display for StatusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusTag::Strength => "strength",
            StatusTag::Defense => "defense",
            StatusTag::Spirit => "spirit",
            StatusTag::Speed => "speed",
            StatusTag::Evasion => "evasion",
            StatusTag::Poison => "poison",
            StatusTag::Burn => "burn",
            StatusTag::Element => "element",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Ally.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Ally);
        assert!(Side::Ally.is_ally());
        assert!(!Side::Enemy.is_ally());
    }
}
