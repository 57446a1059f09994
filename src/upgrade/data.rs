//! Shipped ascension recipes. Weapons get dragonslayer/soulreaper, body
//! armour pieces get guardian/lifebinder, jewellery gets nothing.

use super::types::{SpecialEffect, StatMultipliers, UpgradeConfig, UpgradeRequirements};
use crate::items::materials::MaterialRequirement;
use crate::items::types::{EquipmentSlot, Quality, Trigger};

pub fn builtin_upgrades() -> Vec<UpgradeConfig> {
    let weapon = vec![EquipmentSlot::Weapon];
    let armor = vec![
        EquipmentSlot::Armor,
        EquipmentSlot::Helmet,
        EquipmentSlot::Boots,
    ];

    vec![
        UpgradeConfig {
            id: "dragonslayer".to_string(),
            name: "Dragonslayer".to_string(),
            description: "Temper the weapon in dragonfire.".to_string(),
            applicable_slots: weapon.clone(),
            requirements: UpgradeRequirements {
                quality: Quality::Rare,
                enhance_level: Some(3),
            },
            materials: vec![
                MaterialRequirement::new("dragonScale", 1),
                MaterialRequirement::new("arcaneCrystal", 2),
            ],
            gold_cost: 3000,
            success_rate: 0.6,
            multipliers: StatMultipliers {
                attack: Some(1.3),
                ..StatMultipliers::default()
            },
            crit_rate_bonus: None,
            crit_damage_bonus: Some(0.2),
            special: SpecialEffect {
                name: "Dragonslayer's Wrath".to_string(),
                description: "Strikes may erupt in a burst of dragonfire.".to_string(),
                trigger: Trigger::OnHit,
                chance: 0.15,
                cooldown: 5,
            },
            failure_protection: false,
        },
        UpgradeConfig {
            id: "soulreaper".to_string(),
            name: "Soulreaper".to_string(),
            description: "Bind a hungry spirit to the blade.".to_string(),
            applicable_slots: weapon,
            requirements: UpgradeRequirements {
                quality: Quality::Uncommon,
                enhance_level: None,
            },
            materials: vec![
                MaterialRequirement::new("mithrilOre", 3),
                MaterialRequirement::new("arcaneCrystal", 1),
            ],
            gold_cost: 1500,
            success_rate: 0.7,
            multipliers: StatMultipliers {
                attack: Some(1.2),
                ..StatMultipliers::default()
            },
            crit_rate_bonus: Some(0.05),
            crit_damage_bonus: None,
            special: SpecialEffect {
                name: "Soul Harvest".to_string(),
                description: "Kills may restore a portion of health.".to_string(),
                trigger: Trigger::OnKill,
                chance: 0.3,
                cooldown: 0,
            },
            failure_protection: true,
        },
        UpgradeConfig {
            id: "guardian".to_string(),
            name: "Guardian".to_string(),
            description: "Inscribe warding runes into the metal.".to_string(),
            applicable_slots: armor.clone(),
            requirements: UpgradeRequirements {
                quality: Quality::Uncommon,
                enhance_level: None,
            },
            materials: vec![
                MaterialRequirement::new("mithrilOre", 3),
                MaterialRequirement::new("ironScrap", 10),
            ],
            gold_cost: 1200,
            success_rate: 0.75,
            multipliers: StatMultipliers {
                defense: Some(1.25),
                hp: Some(1.1),
                ..StatMultipliers::default()
            },
            crit_rate_bonus: None,
            crit_damage_bonus: None,
            special: SpecialEffect {
                name: "Guardian's Aegis".to_string(),
                description: "Taking damage may raise a brief barrier.".to_string(),
                trigger: Trigger::OnDamaged,
                chance: 0.2,
                cooldown: 8,
            },
            failure_protection: true,
        },
        UpgradeConfig {
            id: "lifebinder".to_string(),
            name: "Lifebinder".to_string(),
            description: "Weave living threads through the lining.".to_string(),
            applicable_slots: armor,
            requirements: UpgradeRequirements {
                quality: Quality::Rare,
                enhance_level: Some(2),
            },
            materials: vec![
                MaterialRequirement::new("arcaneCrystal", 2),
                MaterialRequirement::new("dragonScale", 1),
            ],
            gold_cost: 2500,
            success_rate: 0.6,
            multipliers: StatMultipliers {
                defense: Some(1.1),
                hp: Some(1.4),
                ..StatMultipliers::default()
            },
            crit_rate_bonus: None,
            crit_damage_bonus: None,
            special: SpecialEffect {
                name: "Lifebind".to_string(),
                description: "Healing may be echoed a second time.".to_string(),
                trigger: Trigger::OnHeal,
                chance: 0.25,
                cooldown: 10,
            },
            failure_protection: false,
        },
    ]
}
