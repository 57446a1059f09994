use crate::items::materials::MaterialRequirement;
use crate::items::types::{EquipmentSlot, Stats};
use serde::{Deserialize, Serialize};

/// Where the affix sits in the item's lore. Exclusive prefixes are the
/// elemental ones; only the recipe data distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AffixKind {
    Prefix,
    ExclusivePrefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Ice => "Ice",
            Element::Lightning => "Lightning",
            Element::Poison => "Poison",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementalBonus {
    pub element: Element,
    pub damage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnchantConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub affix: AffixKind,
    pub slots: Vec<EquipmentSlot>,
    pub materials: Vec<MaterialRequirement>,
    pub gold_cost: u64,
    pub success_rate: f64,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elemental: Option<ElementalBonus>,
}

impl EnchantConfig {
    pub fn fits(&self, slot: EquipmentSlot) -> bool {
        self.slots.contains(&slot)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnchantPreview {
    pub success_rate: f64,
    pub projected_stats: Stats,
    pub gold_cost: u64,
    pub materials: Vec<MaterialRequirement>,
}
