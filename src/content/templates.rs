//! Built-in character templates.

use crate::core::Element::{Air, Astral, Dark, Earth, Electric, Fire, Ice, Water, Wild};
use crate::roster::{CharacterTemplate, StatBlock};

/// Base stats. Every template starts with 4 mana.
const fn base(health: f64, strength: f64, defense: f64, spirit: f64, speed: f64) -> StatBlock {
    StatBlock::new(health, 4.0, strength, defense, spirit, speed)
}

/// Per-level growth. Mana never grows.
const fn growth(health: f64, strength: f64, defense: f64, spirit: f64, speed: f64) -> StatBlock {
    StatBlock::new(health, 0.0, strength, defense, spirit, speed)
}

/// Every built-in template, in table order.
#[must_use]
pub fn builtin_templates() -> Vec<CharacterTemplate> {
    vec![
        CharacterTemplate::new("chocolate_chip", &[Earth])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.25, 2.25, 1.5))
            .unlock("bash", 0)
            .unlock("chocolate-blast", 1)
            .unlock("sweet-heal", 3)
            .unlock("cookie-crunch", 4),
        CharacterTemplate::new("daring_wolfpup", &[Wild])
            .with_base(base(30.0, 6.0, 5.0, 4.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.0, 2.0, 2.0))
            .unlock("bash", 0)
            .unlock("fierce-bite", 2)
            .unlock("inspiring-howl", 4),
        CharacterTemplate::new("sprigshell", &[Earth])
            .with_base(base(30.0, 5.0, 6.0, 5.0, 5.0))
            .with_growth(growth(5.0, 1.5, 3.0, 2.0, 1.5))
            .unlock("bash", 0)
            .unlock("leaf-slash", 1)
            .unlock("barkskin", 2)
            .unlock("nature-blessing", 4),
        CharacterTemplate::new("frostnip", &[Ice])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.25, 2.25, 1.5, 2.0))
            .unlock("bash", 0)
            .unlock("ice-shard", 2)
            .unlock("blizzard", 4),
        CharacterTemplate::new("lightning_kat", &[Electric])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.0, 2.0, 2.0))
            .unlock("bash", 0)
            .unlock("lightning-bolt", 1)
            .unlock("lightning-storm", 4),
        CharacterTemplate::new("verdant_viper", &[Earth])
            .with_base(base(30.0, 6.0, 5.0, 5.0, 4.0))
            .with_growth(growth(3.0, 3.5, 1.25, 1.25, 2.0))
            .unlock("bash", 0)
            .unlock("viper-strike", 2)
            .unlock("poison-spray", 3),
        CharacterTemplate::new("giant_capy", &[Earth])
            .with_base(base(30.0, 6.0, 6.0, 3.0, 5.0))
            .with_growth(growth(5.0, 2.0, 3.5, 1.0, 1.5))
            .unlock("chocolate-blast", 0)
            .unlock("earthquake", 4),
        CharacterTemplate::new("flitterfyre", &[Fire])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.0, 2.0, 2.0))
            .unlock("bash", 0)
            .unlock("flame-burp", 1)
            .unlock("scorch", 3),
        CharacterTemplate::new("pondril", &[Water])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.0, 2.0, 2.0))
            .unlock("squirt", 0)
            .unlock("soak", 2),
        CharacterTemplate::new("sporepuff", &[Earth])
            .with_base(base(30.0, 4.0, 5.0, 6.0, 5.0))
            .with_growth(growth(5.0, 1.5, 2.0, 3.0, 1.5))
            .unlock("spore-shot", 0)
            .unlock("poison-spores", 1)
            .unlock("rotting-grasp", 3)
            .unlock("toxic-cloud", 6),
        CharacterTemplate::new("breezeling", &[Air])
            .with_base(base(30.0, 5.0, 4.0, 4.0, 7.0))
            .with_growth(growth(3.0, 3.0, 1.25, 1.25, 2.5))
            .unlock("gale-cut", 0)
            .unlock("updraft", 1)
            .unlock("whirling-feathers", 3),
        CharacterTemplate::new("cinder_chip", &[Fire])
            .with_base(base(30.0, 6.0, 5.0, 4.0, 5.0))
            .with_growth(growth(4.0, 3.0, 1.5, 1.5, 2.0))
            .unlock("bash", 0)
            .unlock("flame-lash", 1)
            .unlock("scorch", 3)
            .unlock("molten-burst", 4),
        CharacterTemplate::new("ripple_chip", &[Water])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 1.5, 1.5, 3.0, 2.0))
            .unlock("bash", 0)
            .unlock("squirt", 1)
            .unlock("sweet-heal", 3),
        CharacterTemplate::new("fayluna", &[Astral])
            .with_base(base(30.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 1.5, 1.5, 3.0, 2.0))
            .unlock("bash", 0)
            .unlock("celestial-beam", 1)
            .unlock("astral-veil", 3),
        // Mini bosses
        CharacterTemplate::new("stonebound_sentinel", &[Earth])
            .with_base(base(35.0, 6.0, 7.0, 4.0, 3.0))
            .with_growth(growth(6.0, 2.5, 3.5, 1.0, 1.0))
            .unlock("boulder-bash", 0)
            .unlock("iron-bulwark", 1)
            .unlock("earthen-grasp", 2)
            .unlock("stone-spire", 3),
        CharacterTemplate::new("gravebound_husk", &[Earth, Dark])
            .with_base(base(25.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.0, 2.0, 2.0))
            .unlock("decay-claw", 0)
            .unlock("rot-tide", 2),
        CharacterTemplate::new("boneoak_zombie", &[Earth, Dark])
            .with_base(base(25.0, 5.0, 5.0, 5.0, 5.0))
            .with_growth(growth(4.0, 2.0, 2.0, 2.0, 2.0))
            .unlock("bone-spewer", 0)
            .unlock("oak-shackle", 2),
        CharacterTemplate::new("mycera", &[Earth, Dark])
            .with_base(base(35.0, 6.0, 5.0, 4.0, 5.0))
            .with_growth(growth(6.0, 3.0, 3.0, 2.0, 3.0))
            .unlock("leaf-slash", 0)
            .unlock("nature-blessing", 1)
            .unlock("earthquake", 2),
    ]
}
