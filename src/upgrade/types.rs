use crate::items::materials::MaterialRequirement;
use crate::items::types::{Equipment, EquipmentSlot, Quality, Stats, Trigger};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequirements {
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhance_level: Option<u8>,
}

/// Per-stat multipliers. A missing entry leaves the stat unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatMultipliers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp: Option<f64>,
}

/// Triggered effect granted by a successful upgrade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEffect {
    pub name: String,
    pub description: String,
    pub trigger: Trigger,
    pub chance: f64,
    #[serde(default)]
    pub cooldown: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Slots this upgrade may target.
    pub applicable_slots: Vec<EquipmentSlot>,
    pub requirements: UpgradeRequirements,
    pub materials: Vec<MaterialRequirement>,
    pub gold_cost: u64,
    pub success_rate: f64,
    #[serde(default)]
    pub multipliers: StatMultipliers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_rate_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_damage_bonus: Option<f64>,
    pub special: SpecialEffect,
    #[serde(default)]
    pub failure_protection: bool,
}

impl UpgradeConfig {
    pub fn fits(&self, slot: EquipmentSlot) -> bool {
        self.applicable_slots.contains(&slot)
    }

    pub fn requirements_met(&self, equipment: &Equipment) -> bool {
        equipment.quality >= self.requirements.quality
            && self
                .requirements
                .enhance_level
                .map_or(true, |level| equipment.enhance_level >= level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpgradePreview {
    pub success_rate: f64,
    pub projected_stats: Stats,
    pub projected_quality: Quality,
    pub gold_cost: u64,
    pub materials: Vec<MaterialRequirement>,
    pub failure_protection: bool,
}

/// What came out of an attempted upgrade whose preconditions held.
#[derive(Debug, Clone, PartialEq)]
pub enum UpgradeOutcome {
    Upgraded(Equipment),
    /// Roll lost, but the recipe protects the item; this is the untouched original.
    Protected(Equipment),
    /// Roll lost on an unprotected recipe.
    Destroyed,
}

impl UpgradeOutcome {
    pub fn into_equipment(self) -> Option<Equipment> {
        match self {
            UpgradeOutcome::Upgraded(e) | UpgradeOutcome::Protected(e) => Some(e),
            UpgradeOutcome::Destroyed => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, UpgradeOutcome::Upgraded(_))
    }
}
