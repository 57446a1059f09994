//! Shipped equipment templates and materials.

use super::catalog::{EquipmentTemplate, MaterialDef};
use super::types::{EquipmentSlot, Quality, Stats};

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    description: &str,
    slot: EquipmentSlot,
    quality: Quality,
    level_requirement: u32,
    icon: &str,
    stats: Stats,
) -> EquipmentTemplate {
    EquipmentTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        slot,
        icon: icon.to_string(),
        stats,
        quality,
        level_requirement,
    }
}

fn material(
    id: &str,
    name: &str,
    description: &str,
    quality: Quality,
    stack_limit: u32,
) -> MaterialDef {
    MaterialDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        quality,
        stack_limit,
        icon: format!("mat_{id}"),
    }
}

pub fn builtin_templates() -> Vec<EquipmentTemplate> {
    use EquipmentSlot::*;
    use Quality::*;

    vec![
        // Weapons
        template(
            "woodenSword",
            "Wooden Sword",
            "A practice blade carved from oak.",
            Weapon,
            Common,
            1,
            "sword_wood",
            Stats {
                attack: Some(5),
                crit_rate: Some(0.02),
                ..Stats::default()
            },
        ),
        template(
            "ironSword",
            "Iron Sword",
            "Standard issue for the town guard.",
            Weapon,
            Uncommon,
            5,
            "sword_iron",
            Stats {
                attack: Some(12),
                crit_rate: Some(0.05),
                ..Stats::default()
            },
        ),
        template(
            "oakStaff",
            "Oak Staff",
            "Hums faintly when held by a mage.",
            Weapon,
            Uncommon,
            5,
            "staff_oak",
            Stats {
                attack: Some(8),
                mp: Some(20),
                ..Stats::default()
            },
        ),
        template(
            "steelBlade",
            "Steel Blade",
            "Folded steel with a keen edge.",
            Weapon,
            Rare,
            10,
            "sword_steel",
            Stats {
                attack: Some(22),
                crit_rate: Some(0.07),
                crit_damage: Some(1.5),
                ..Stats::default()
            },
        ),
        template(
            "mithrilSaber",
            "Mithril Saber",
            "Light as a feather, hard as dragonbone.",
            Weapon,
            Epic,
            18,
            "sword_mithril",
            Stats {
                attack: Some(35),
                crit_rate: Some(0.10),
                crit_damage: Some(1.6),
                ..Stats::default()
            },
        ),
        template(
            "dragonFang",
            "Dragon Fang",
            "Ground from the tooth of an elder wyrm.",
            Weapon,
            Legendary,
            25,
            "sword_dragon",
            Stats {
                attack: Some(55),
                crit_rate: Some(0.12),
                crit_damage: Some(1.8),
                ..Stats::default()
            },
        ),
        // Armor
        template(
            "clothTunic",
            "Cloth Tunic",
            "Better than nothing.",
            Armor,
            Common,
            1,
            "armor_cloth",
            Stats {
                defense: Some(3),
                hp: Some(10),
                ..Stats::default()
            },
        ),
        template(
            "leatherArmor",
            "Leather Armor",
            "Boiled leather stitched over padding.",
            Armor,
            Uncommon,
            5,
            "armor_leather",
            Stats {
                defense: Some(6),
                hp: Some(20),
                ..Stats::default()
            },
        ),
        template(
            "chainMail",
            "Chain Mail",
            "Thousands of riveted rings.",
            Armor,
            Rare,
            10,
            "armor_chain",
            Stats {
                defense: Some(12),
                hp: Some(40),
                ..Stats::default()
            },
        ),
        template(
            "plateArmor",
            "Plate Armor",
            "Heavy, loud and nearly impenetrable.",
            Armor,
            Epic,
            18,
            "armor_plate",
            Stats {
                defense: Some(20),
                hp: Some(70),
                ..Stats::default()
            },
        ),
        template(
            "dragonscaleArmor",
            "Dragonscale Armor",
            "Still warm to the touch.",
            Armor,
            Legendary,
            25,
            "armor_dragon",
            Stats {
                defense: Some(32),
                hp: Some(120),
                ..Stats::default()
            },
        ),
        // Helmets
        template(
            "leatherCap",
            "Leather Cap",
            "Keeps the rain off, mostly.",
            Helmet,
            Common,
            1,
            "helm_leather",
            Stats {
                defense: Some(2),
                hp: Some(5),
                ..Stats::default()
            },
        ),
        template(
            "ironHelm",
            "Iron Helm",
            "A dented but dependable helm.",
            Helmet,
            Uncommon,
            5,
            "helm_iron",
            Stats {
                defense: Some(5),
                hp: Some(10),
                ..Stats::default()
            },
        ),
        template(
            "knightHelm",
            "Knight's Helm",
            "Crested helm of a fallen order.",
            Helmet,
            Epic,
            18,
            "helm_knight",
            Stats {
                defense: Some(12),
                hp: Some(30),
                ..Stats::default()
            },
        ),
        // Boots
        template(
            "sandals",
            "Sandals",
            "Airy and unprotective.",
            Boots,
            Common,
            1,
            "boots_sandal",
            Stats {
                defense: Some(1),
                ..Stats::default()
            },
        ),
        template(
            "leatherBoots",
            "Leather Boots",
            "Broken in by a long road.",
            Boots,
            Uncommon,
            5,
            "boots_leather",
            Stats {
                defense: Some(3),
                hp: Some(8),
                ..Stats::default()
            },
        ),
        template(
            "ironGreaves",
            "Iron Greaves",
            "Every step rings like a bell.",
            Boots,
            Rare,
            10,
            "boots_iron",
            Stats {
                defense: Some(7),
                hp: Some(15),
                ..Stats::default()
            },
        ),
        // Rings
        template(
            "copperRing",
            "Copper Ring",
            "Turns fingers green.",
            Ring,
            Common,
            1,
            "ring_copper",
            Stats {
                attack: Some(2),
                ..Stats::default()
            },
        ),
        template(
            "silverRing",
            "Silver Ring",
            "Etched with a hunter's mark.",
            Ring,
            Uncommon,
            5,
            "ring_silver",
            Stats {
                attack: Some(4),
                crit_rate: Some(0.03),
                ..Stats::default()
            },
        ),
        template(
            "rubyRing",
            "Ruby Ring",
            "The stone pulses like a heartbeat.",
            Ring,
            Epic,
            18,
            "ring_ruby",
            Stats {
                attack: Some(10),
                crit_damage: Some(0.3),
                ..Stats::default()
            },
        ),
        // Necklaces
        template(
            "slimeGel",
            "Slime Gel Charm",
            "A wobbling bead of slime on a cord.",
            Necklace,
            Common,
            1,
            "neck_slime",
            Stats {
                hp: Some(15),
                mp: Some(5),
                ..Stats::default()
            },
        ),
        template(
            "jadeAmulet",
            "Jade Amulet",
            "Cool jade that steadies the mind.",
            Necklace,
            Rare,
            10,
            "neck_jade",
            Stats {
                hp: Some(30),
                mp: Some(20),
                ..Stats::default()
            },
        ),
        template(
            "phoenixPendant",
            "Phoenix Pendant",
            "A feather that never stops smouldering.",
            Necklace,
            Legendary,
            25,
            "neck_phoenix",
            Stats {
                hp: Some(80),
                mp: Some(40),
                ..Stats::default()
            },
        ),
    ]
}

pub fn builtin_materials() -> Vec<MaterialDef> {
    vec![
        material("ironScrap", "Iron Scrap", "Bent nails and broken rivets.", Quality::Common, 999),
        material(
            "magicDust",
            "Magic Dust",
            "Glittering residue of old enchantments.",
            Quality::Common,
            999,
        ),
        material(
            "mithrilOre",
            "Mithril Ore",
            "A silvery ore, light and strong.",
            Quality::Uncommon,
            999,
        ),
        material(
            "arcaneCrystal",
            "Arcane Crystal",
            "Stores a sliver of raw mana.",
            Quality::Rare,
            999,
        ),
        material("dragonScale", "Dragon Scale", "Shed by something enormous.", Quality::Epic, 99),
        material(
            "soulGem",
            "Soul Gem",
            "Something inside is still watching.",
            Quality::Legendary,
            99,
        ),
    ]
}
