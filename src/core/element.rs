//! Elemental affinities and the effectiveness chart.
//!
//! Each element lists the elements it resists and the elements it is weak
//! to. A character may carry several affinities; lookups combine across all
//! of them.

use serde::{Deserialize, Serialize};

/// Damage multiplier applied per matching weakness (divided per resistance).
pub const ELEMENTAL_EFFECTIVENESS: f64 = 1.5;

/// An elemental tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Air,
    Astral,
    Dark,
    Earth,
    Fire,
    Ice,
    Sol,
    Water,
    Wild,
    Electric,
}

impl Element {
    /// All elements, in chart order.
    pub const ALL: [Element; 10] = [
        Element::Air,
        Element::Astral,
        Element::Dark,
        Element::Earth,
        Element::Fire,
        Element::Ice,
        Element::Sol,
        Element::Water,
        Element::Wild,
        Element::Electric,
    ];

    /// Elements a carrier of `self` resists.
    #[must_use]
    pub const fn resistances(self) -> &'static [Element] {
        use Element::*;
        match self {
            Air => &[Wild],
            Astral => &[Fire, Earth, Water, Wild],
            Dark => &[Astral, Electric],
            Earth => &[Air, Electric],
            Fire => &[Earth, Ice],
            Ice => &[Water, Earth],
            Sol => &[Dark],
            Water => &[Fire, Sol],
            Wild => &[Dark],
            Electric => &[Water, Air],
        }
    }

    /// Elements a carrier of `self` is weak to.
    #[must_use]
    pub const fn weaknesses(self) -> &'static [Element] {
        use Element::*;
        match self {
            Air => &[Earth, Electric],
            Astral => &[Dark],
            Dark => &[Sol, Wild],
            Earth => &[Fire, Astral, Ice],
            Fire => &[Water, Astral],
            Ice => &[Fire],
            Sol => &[Water],
            Water => &[Ice, Astral, Electric],
            Wild => &[Astral, Air],
            Electric => &[Earth, Dark],
        }
    }

    /// Is a carrier of `self` weak to `incoming`?
    #[must_use]
    pub fn is_weak_to(self, incoming: Element) -> bool {
        self.weaknesses().contains(&incoming)
    }

    /// Does a carrier of `self` resist `incoming`?
    #[must_use]
    pub fn resists(self, incoming: Element) -> bool {
        self.resistances().contains(&incoming)
    }

    /// Lowercase name used in content tables.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use Element::*;
        match self {
            Air => "air",
            Astral => "astral",
            Dark => "dark",
            Earth => "earth",
            Fire => "fire",
            Ice => "ice",
            Sol => "sol",
            Water => "water",
            Wild => "wild",
            Electric => "electric",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Multiplier for `incoming` against a set of affinities.
///
/// Multiplies by [`ELEMENTAL_EFFECTIVENESS`] for every affinity weak to the
/// element and divides by it for every affinity resisting it.
#[must_use]
pub fn elemental_multiplier(affinities: &[Element], incoming: Element) -> f64 {
    affinities.iter().fold(1.0, |acc, affinity| {
        let mut m = acc;
        if affinity.is_weak_to(incoming) {
            m *= ELEMENTAL_EFFECTIVENESS;
        }
        if affinity.resists(incoming) {
            m /= ELEMENTAL_EFFECTIVENESS;
        }
        m
    })
}
