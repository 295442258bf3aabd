//! Built-in ability table.

use crate::abilities::{Ability, BuffTemplate, DebuffTemplate, TargetAlignment, TargetShape};
use crate::core::Element::{self, Air, Astral, Earth, Electric, Fire, Ice, Water, Wild};
use crate::core::StatusTag;

/// Basic attack that regenerates one mana.
fn basic(key: &str, power: f64, element: Element) -> Ability {
    Ability::attack(key, power, element).with_cost(-1.0)
}

/// Attack hitting the whole opposing side.
fn sweep(key: &str, power: f64, element: Element, cost: f64) -> Ability {
    Ability::attack(key, power, element)
        .with_shape(TargetShape::All)
        .with_cost(cost)
}

fn poison(chance_pct: f64) -> DebuffTemplate {
    DebuffTemplate::dot(StatusTag::Poison, Earth, 6.0, 4, chance_pct)
}

/// Every built-in ability, in table order.
#[must_use]
pub fn builtin_abilities() -> Vec<Ability> {
    vec![
        // Wild
        basic("bash", 30.0, Wild),
        basic("fierce-bite", 40.0, Wild),
        Ability::attack("cookie-crunch", 50.0, Wild),
        // Earth
        basic("leaf-slash", 35.0, Earth),
        basic("chocolate-blast", 35.0, Earth),
        basic("viper-strike", 35.0, Earth),
        basic("boulder-bash", 40.0, Earth),
        basic("decay-claw", 30.0, Earth),
        Ability::heal("nature-blessing", 50.0, Earth).with_cost(2.0),
        Ability::heal("sweet-heal", 40.0, Earth).with_cost(2.0),
        Ability::heal("inspiring-howl", 50.0, Earth)
            .with_shape(TargetShape::All)
            .with_cost(2.0),
        sweep("earthquake", 70.0, Earth, 3.0),
        sweep("stone-spire", 60.0, Earth, 2.0),
        Ability::buff("barkskin", Earth, BuffTemplate::modifier(StatusTag::Defense, 25.0, 4))
            .with_cost(1.0),
        Ability::buff("iron-bulwark", Earth, BuffTemplate::modifier(StatusTag::Defense, 30.0, 4))
            .with_cost(1.0),
        Ability::debuff("poison-spray", 0.0, Earth, poison(100.0)).with_cost(1.0),
        Ability::debuff("poison-spores", 0.0, Earth, poison(100.0)).with_cost(1.0),
        basic("spore-shot", 25.0, Earth).with_on_hit(poison(50.0)),
        Ability::debuff(
            "rotting-grasp",
            0.0,
            Earth,
            DebuffTemplate::modifier(StatusTag::Defense, Earth, 20.0, 4, 100.0),
        )
        .with_cost(1.0),
        Ability::debuff("toxic-cloud", 20.0, Earth, poison(75.0))
            .with_shape(TargetShape::All)
            .with_cost(3.0),
        Ability::debuff(
            "earthen-grasp",
            0.0,
            Earth,
            DebuffTemplate::modifier(StatusTag::Defense, Earth, 25.0, 4, 80.0),
        )
        .with_cost(1.0),
        Ability::debuff("rot-tide", 20.0, Earth, poison(100.0))
            .with_shape(TargetShape::All)
            .with_cost(2.0),
        basic("bone-spewer", 25.0, Earth).with_on_hit(DebuffTemplate::modifier(
            StatusTag::Defense,
            Earth,
            20.0,
            3,
            100.0,
        )),
        Ability::debuff(
            "oak-shackle",
            0.0,
            Earth,
            DebuffTemplate::modifier(StatusTag::Strength, Earth, 20.0, 3, 100.0),
        )
        .with_shape(TargetShape::All)
        .with_cost(2.0),
        // Ice
        basic("ice-shard", 35.0, Ice),
        sweep("blizzard", 50.0, Ice, 2.0),
        // Water
        basic("squirt", 35.0, Water),
        Ability::debuff("soak", 0.0, Water, DebuffTemplate::element_attach(Water, 4, 100.0))
            .with_alignment(TargetAlignment::Any)
            .with_cost(1.0),
        sweep("tidal-wave", 50.0, Water, 2.0),
        // Fire
        basic("flame-burp", 35.0, Fire),
        basic("flame-lash", 35.0, Fire),
        Ability::attack("molten-burst", 60.0, Fire).with_cost(2.0),
        Ability::debuff(
            "scorch",
            0.0,
            Fire,
            DebuffTemplate::dot(StatusTag::Burn, Fire, 6.0, 4, 100.0),
        )
        .with_cost(1.0),
        // Electric
        basic("lightning-bolt", 40.0, Electric),
        sweep("lightning-storm", 70.0, Electric, 3.0),
        // Astral
        basic("celestial-beam", 35.0, Astral),
        Ability::buff("astral-veil", Astral, BuffTemplate::shield(2, 1)).with_cost(2.0),
        // Air
        basic("gale-cut", 35.0, Air),
        Ability::buff("updraft", Air, BuffTemplate::modifier(StatusTag::Evasion, 15.0, 5))
            .with_cost(1.0),
        sweep("whirling-feathers", 50.0, Air, 2.0),
    ]
}
