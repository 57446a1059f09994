//! Shipped enchant recipes.

use super::types::{AffixKind, ElementalBonus, Element, EnchantConfig};
use crate::items::materials::MaterialRequirement;
use crate::items::types::{EquipmentSlot, Stats};

pub fn builtin_enchants() -> Vec<EnchantConfig> {
    use EquipmentSlot::*;

    vec![
        EnchantConfig {
            id: "sharpness".to_string(),
            name: "Sharp".to_string(),
            description: "A honed edge that bites deeper.".to_string(),
            affix: AffixKind::Prefix,
            slots: vec![Weapon],
            materials: vec![
                MaterialRequirement::new("ironScrap", 5),
                MaterialRequirement::new("magicDust", 2),
            ],
            gold_cost: 100,
            success_rate: 0.9,
            stats: Stats {
                attack: Some(5),
                ..Stats::default()
            },
            elemental: None,
        },
        EnchantConfig {
            id: "flaming".to_string(),
            name: "Flaming".to_string(),
            description: "The blade is wreathed in fire.".to_string(),
            affix: AffixKind::ExclusivePrefix,
            slots: vec![Weapon],
            materials: vec![
                MaterialRequirement::new("magicDust", 5),
                MaterialRequirement::new("arcaneCrystal", 1),
            ],
            gold_cost: 500,
            success_rate: 0.7,
            stats: Stats {
                attack: Some(3),
                ..Stats::default()
            },
            elemental: Some(ElementalBonus {
                element: Element::Fire,
                damage: 10,
            }),
        },
        EnchantConfig {
            id: "frost".to_string(),
            name: "Frozen".to_string(),
            description: "Rimed with frost that never melts.".to_string(),
            affix: AffixKind::ExclusivePrefix,
            slots: vec![Weapon],
            materials: vec![
                MaterialRequirement::new("magicDust", 5),
                MaterialRequirement::new("arcaneCrystal", 1),
            ],
            gold_cost: 500,
            success_rate: 0.7,
            stats: Stats {
                crit_rate: Some(0.02),
                ..Stats::default()
            },
            elemental: Some(ElementalBonus {
                element: Element::Ice,
                damage: 8,
            }),
        },
        EnchantConfig {
            id: "thundering".to_string(),
            name: "Thundering".to_string(),
            description: "Crackles with barely contained lightning.".to_string(),
            affix: AffixKind::ExclusivePrefix,
            slots: vec![Weapon, Ring],
            materials: vec![
                MaterialRequirement::new("arcaneCrystal", 2),
                MaterialRequirement::new("dragonScale", 1),
            ],
            gold_cost: 2000,
            success_rate: 0.5,
            stats: Stats {
                attack: Some(8),
                ..Stats::default()
            },
            elemental: Some(ElementalBonus {
                element: Element::Lightning,
                damage: 15,
            }),
        },
        EnchantConfig {
            id: "venomous".to_string(),
            name: "Venomous".to_string(),
            description: "Weeps a slow green poison.".to_string(),
            affix: AffixKind::ExclusivePrefix,
            slots: vec![Weapon],
            materials: vec![
                MaterialRequirement::new("magicDust", 4),
                MaterialRequirement::new("mithrilOre", 2),
            ],
            gold_cost: 400,
            success_rate: 0.75,
            stats: Stats::default(),
            elemental: Some(ElementalBonus {
                element: Element::Poison,
                damage: 6,
            }),
        },
        EnchantConfig {
            id: "fortified".to_string(),
            name: "Fortified".to_string(),
            description: "Reinforced plates and stitching.".to_string(),
            affix: AffixKind::Prefix,
            slots: vec![Armor, Helmet, Boots],
            materials: vec![
                MaterialRequirement::new("ironScrap", 8),
                MaterialRequirement::new("mithrilOre", 1),
            ],
            gold_cost: 150,
            success_rate: 0.85,
            stats: Stats {
                defense: Some(4),
                hp: Some(10),
                ..Stats::default()
            },
            elemental: None,
        },
        EnchantConfig {
            id: "ofTheBear".to_string(),
            name: "of the Bear".to_string(),
            description: "Grants the vitality of a great bear.".to_string(),
            affix: AffixKind::Suffix,
            slots: vec![Armor, Helmet, Boots, Necklace],
            materials: vec![
                MaterialRequirement::new("mithrilOre", 2),
                MaterialRequirement::new("magicDust", 3),
            ],
            gold_cost: 300,
            success_rate: 0.75,
            stats: Stats {
                hp: Some(25),
                ..Stats::default()
            },
            elemental: None,
        },
        EnchantConfig {
            id: "ofTheOwl".to_string(),
            name: "of the Owl".to_string(),
            description: "Sharpens the wearer's mind.".to_string(),
            affix: AffixKind::Suffix,
            slots: vec![Helmet, Ring, Necklace],
            materials: vec![MaterialRequirement::new("magicDust", 4)],
            gold_cost: 250,
            success_rate: 0.8,
            stats: Stats {
                mp: Some(15),
                ..Stats::default()
            },
            elemental: None,
        },
        EnchantConfig {
            id: "ofPrecision".to_string(),
            name: "of Precision".to_string(),
            description: "Guides every strike toward a weak point.".to_string(),
            affix: AffixKind::Suffix,
            slots: vec![Weapon, Ring],
            materials: vec![MaterialRequirement::new("arcaneCrystal", 2)],
            gold_cost: 800,
            success_rate: 0.6,
            stats: Stats {
                crit_rate: Some(0.03),
                crit_damage: Some(0.1),
                ..Stats::default()
            },
            elemental: None,
        },
    ]
}
